//! R-tree算法模块
//!
//! 这个模块包含R-tree的核心算法实现，按功能分解为不同的子模块：
//! - insert: 插入和ChooseLeaf选择算法
//! - split: 二次分裂和溢出向上传播
//! - delete: 删除、CondenseTree和孤儿条目重插
//! - search: 窗口查询和全量遍历
//! - utils: 路径导航与MBR向上调整
//! - debug: 结构校验和可视化导出

pub mod debug;
pub mod delete;
pub mod insert;
pub mod search;
pub mod split;
pub mod utils;
