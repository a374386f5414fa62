use geo::algorithm::bounding_rect::BoundingRect;
use geo::Geometry;
use geojson::GeoJson;
use thiserror::Error;

use crate::rectangle::Rectangle;
use crate::rtree::Spatial;

/// GeoItem构造相关的错误类型
#[derive(Debug, Error)]
pub enum GeoItemError {
    /// 几何体为空，无法计算边界框
    #[error("cannot compute bounding box for empty geometry: id={id}")]
    EmptyGeometry { id: String },

    /// GeoJSON解析或转换失败
    #[error("invalid GeoJSON: {0}")]
    InvalidGeoJson(#[from] geojson::Error),

    /// 仅支持 GeoJSON Geometry 和带几何体的 Feature 文档
    #[error("unsupported GeoJSON document (expected Geometry or Feature with geometry)")]
    UnsupportedDocument,
}

/// 地理几何数据条目 - 内置的 [`Spatial`] 实现
///
/// 构造时就预计算好几何体的边界框，保证 `bounding_box()` 稳定
/// 且查询路径上不需要重复计算。树本身只按边界框剪枝，精确的
/// 几何相交判断留给调用方。
#[derive(Debug, Clone)]
pub struct GeoItem {
    id: String,
    geometry: Geometry,
    bbox: Rectangle,
}

impl GeoItem {
    /// 从几何体创建条目
    ///
    /// 几何体为空（没有任何坐标）时返回 [`GeoItemError::EmptyGeometry`]。
    pub fn new(id: impl Into<String>, geometry: Geometry) -> Result<Self, GeoItemError> {
        let id = id.into();

        let Some(bbox) = geometry_to_bbox(&geometry) else {
            return Err(GeoItemError::EmptyGeometry { id });
        };

        Ok(GeoItem { id, geometry, bbox })
    }

    /// 从GeoJSON字符串创建条目
    ///
    /// 支持 GeoJSON 类型：Geometry 和 Feature
    pub fn from_geojson(id: impl Into<String>, geojson_str: &str) -> Result<Self, GeoItemError> {
        let geojson = geojson_str.parse::<GeoJson>()?;

        let geometry: Geometry = match geojson {
            GeoJson::Geometry(g) => g.try_into()?,
            GeoJson::Feature(f) => {
                let geometry = f.geometry.ok_or(GeoItemError::UnsupportedDocument)?;
                geometry.try_into()?
            }
            GeoJson::FeatureCollection(_) => return Err(GeoItemError::UnsupportedDocument),
        };

        Self::new(id, geometry)
    }

    /// 获取几何体
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }
}

impl Spatial for GeoItem {
    fn bounding_box(&self) -> Rectangle {
        self.bbox
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// 从 geo::Geometry 计算边界框
fn geometry_to_bbox(geometry: &Geometry) -> Option<Rectangle> {
    let rect = geometry.bounding_rect()?;
    Some(Rectangle::new(
        rect.min().x,
        rect.min().y,
        rect.max().x,
        rect.max().y,
    ))
}
