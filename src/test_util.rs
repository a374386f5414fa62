//! 测试共用的数据构造

use crate::rectangle::Rectangle;
use crate::rtree::Spatial;

/// 点状地理位置，按城市名做ID
#[derive(Debug, Clone)]
pub(crate) struct City {
    pub name: &'static str,
    pub coordinates: [f64; 2],
}

impl Spatial for City {
    fn bounding_box(&self) -> Rectangle {
        Rectangle::from_point(self.coordinates[0], self.coordinates[1])
    }

    fn id(&self) -> &str {
        self.name
    }
}

/// 18个城市的经纬度表
pub(crate) fn city_locations() -> Vec<City> {
    [
        ("Genova", [8.928275776757602, 44.40716297481325]),
        ("Milan", [9.19188426947727, 45.467509939027025]),
        ("Rome", [12.49928631809945, 41.91961251548011]),
        ("Geneve", [6.1517749934533015, 46.21514311923974]),
        ("Paris", [2.3522, 48.8566]),
        ("London", [-0.1276, 51.5074]),
        ("New York", [-74.0060, 40.7128]),
        ("Tokyo", [139.6917, 35.6895]),
        ("Berlin", [13.4050, 52.5200]),
        ("Sydney", [151.2093, -33.8688]),
        ("Dubai", [55.2708, 25.276987]),
        ("Rio de Janeiro", [-43.1729, -22.9068]),
        ("Los Angeles", [-118.2437, 34.0522]),
        ("Shanghai", [121.4737, 31.2304]),
        ("Hong Kong", [114.1694, 22.3193]),
        ("Singapore", [103.8198, 1.3521]),
        ("Bangkok", [100.5167, 13.7563]),
        ("Mexico City", [-99.1332, 19.4326]),
    ]
    .into_iter()
    .map(|(name, coordinates)| City { name, coordinates })
    .collect()
}

pub(crate) const WHOLE_WORLD: Rectangle = Rectangle {
    min: [-180.0, -90.0],
    max: [180.0, 90.0],
};

pub(crate) const NORTH_AMERICA: Rectangle = Rectangle {
    min: [-168.0, 5.0],
    max: [-52.0, 83.0],
};

/// 带标签的矩形条目
#[derive(Debug, Clone)]
pub(crate) struct LabeledRect {
    pub id: String,
    pub rect: Rectangle,
}

impl LabeledRect {
    pub fn new(id: impl Into<String>, rect: Rectangle) -> Self {
        LabeledRect {
            id: id.into(),
            rect,
        }
    }
}

impl Spatial for LabeledRect {
    fn bounding_box(&self) -> Rectangle {
        self.rect
    }

    fn id(&self) -> &str {
        &self.id
    }
}
