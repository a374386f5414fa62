//! # R-tree 空间索引数据结构
//!
//! 这是一个基于 Antonin Guttman 的论文 "R-trees: A Dynamic Index Structure
//! for Spatial Searching" 的二维 R-tree 实现。
//!
//! ## 主要特性
//!
//! - 支持二维空间数据的动态索引：插入、删除、窗口查询
//! - 实现了论文中的 ChooseLeaf / QuadraticSplit / AdjustTree / CondenseTree 算法
//! - 可配置的最大/最小条目数
//! - 对任何实现 [`Spatial`] 的数据类型泛型
//!
//! ## 使用示例
//!
//! ```rust
//! use rtree2d::{RTree, Rectangle, Spatial};
//!
//! struct City {
//!     name: String,
//!     lon: f64,
//!     lat: f64,
//! }
//!
//! impl Spatial for City {
//!     fn bounding_box(&self) -> Rectangle {
//!         Rectangle::from_point(self.lon, self.lat)
//!     }
//!
//!     fn id(&self) -> &str {
//!         &self.name
//!     }
//! }
//!
//! let mut tree = RTree::new();
//! tree.insert(City { name: "Genova".to_string(), lon: 8.928, lat: 44.407 });
//! tree.insert(City { name: "Paris".to_string(), lon: 2.352, lat: 48.857 });
//!
//! // 查询意大利附近的窗口
//! let hits = tree.query(&Rectangle::new(6.0, 36.0, 19.0, 47.0));
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].name, "Genova");
//! ```

pub mod algorithms;
pub mod error;
pub mod geo_item;
pub mod node;
pub mod rectangle;
pub mod rtree;

#[cfg(test)]
pub(crate) mod test_util;

// 重新导出主要的公共接口
pub use error::RTreeError;
pub use geo_item::{GeoItem, GeoItemError};
pub use node::{Entry, Node, NodeType};
pub use rectangle::Rectangle;
pub use rtree::{RTree, Spatial, DEFAULT_MAX_ENTRIES, DEFAULT_MIN_ENTRIES};
