use tracing::debug;

use crate::error::RTreeError;
use crate::node::{Entry, Node};
use crate::rectangle::Rectangle;
use crate::rtree::{RTree, Spatial};

/// R-tree删除算法实现
impl<T: Spatial> RTree<T> {
    /// 删除指定的数据条目 - 遵循论文Algorithm Delete
    ///
    /// 按ID等值匹配，边界框只用来剪枝。第一个命中的叶子中所有
    /// ID相同的条目都会被删除；分散在其他叶子中的同ID条目需要
    /// 再次调用。没有找到任何匹配条目时返回
    /// [`RTreeError::NotFound`]。
    pub fn delete(&mut self, item: &T) -> Result<(), RTreeError> {
        let bbox = item.bounding_box();
        let id = item.id();

        // D1: 找到包含目标ID的叶子节点
        let Some(leaf_path) = self.find_leaf_path(&bbox, id) else {
            return Err(RTreeError::NotFound { id: id.to_string() });
        };

        // D2: 从叶子节点删除所有ID匹配的条目
        let leaf = self.node_mut(&leaf_path);
        leaf.entries.retain(|entry| match entry {
            Entry::Data { data, .. } => data.id() != id,
            Entry::Node { .. } => true,
        });

        // D3: 处理下溢，收集需要重插的孤儿条目
        let orphans = self.condense_tree(leaf_path);

        if !orphans.is_empty() {
            debug!(count = orphans.len(), "reinserting orphaned entries");
        }

        for orphan in orphans {
            if let Entry::Data { data, .. } = orphan {
                self.insert(data);
            }
        }

        // D4: 根节点是索引节点且只剩一个子节点时缩短树
        self.shrink_root();

        Ok(())
    }

    /// 查找包含指定ID的叶子节点路径
    ///
    /// 只沿边界框与目标相交的子树下降，ID才是匹配依据。
    /// 找不到时返回None。
    fn find_leaf_path(&self, bbox: &Rectangle, id: &str) -> Option<Vec<usize>> {
        let mut path = Vec::new();

        if Self::find_leaf_recursive(self.root_ref(), bbox, id, &mut path) {
            Some(path)
        } else {
            None
        }
    }

    /// 递归查找包含指定ID条目的叶子节点
    fn find_leaf_recursive(
        node: &Node<T>,
        bbox: &Rectangle,
        id: &str,
        path: &mut Vec<usize>,
    ) -> bool {
        if node.is_leaf() {
            return node
                .entries
                .iter()
                .any(|entry| matches!(entry, Entry::Data { data, .. } if data.id() == id));
        }

        for (i, entry) in node.entries.iter().enumerate() {
            if let Entry::Node { mbr, node: child } = entry {
                if mbr.intersects(bbox) {
                    path.push(i);
                    if Self::find_leaf_recursive(child, bbox, id, path) {
                        return true;
                    }
                    path.pop();
                }
            }
        }

        false
    }

    /// CondenseTree - 从删除发生的节点向上（不含根节点）处理下溢
    ///
    /// 下溢的节点整体从父节点摘除，其子树中的全部数据条目作为孤儿
    /// 返回给调用者重插；未下溢的节点只重算MBR。最后重算根节点的MBR。
    pub(crate) fn condense_tree(&mut self, mut path: Vec<usize>) -> Vec<Entry<T>> {
        let min_entries = self.min_entries();
        let mut orphans = Vec::new();

        while let Some(index) = path.pop() {
            // path 现在指向父节点，index 是当前节点在父节点中的下标
            let parent = self.node_mut(&path);

            let underflowing = match parent.entries.get(index) {
                Some(Entry::Node { node, .. }) => node.underflowing(min_entries),
                _ => panic!("corrupted tree path: {:?}", path),
            };

            if underflowing {
                // 摘除下溢节点，收集其子树中的所有数据条目
                let detached = parent.entries.remove(index);
                if let Entry::Node { node, .. } = detached {
                    debug!(
                        level = node.level,
                        remaining = node.entries.len(),
                        "condensing underfull node"
                    );
                    Self::collect_data_entries(*node, &mut orphans);
                }
            } else if let Some(Entry::Node { mbr, node }) = parent.entries.get_mut(index) {
                // 只重算当前节点的MBR，并同步父节点中的条目MBR
                node.update_mbr();
                *mbr = node.mbr;
            }
        }

        // 最后调整根节点的MBR
        self.root_mut().update_mbr();

        orphans
    }

    /// 收集子树中的所有数据条目
    fn collect_data_entries(node: Node<T>, orphans: &mut Vec<Entry<T>>) {
        for entry in node.entries {
            match entry {
                data_entry @ Entry::Data { .. } => orphans.push(data_entry),
                Entry::Node { node, .. } => Self::collect_data_entries(*node, orphans),
            }
        }
    }

    /// 缩短树 - 根节点是索引节点且只剩一个子节点时提升该子节点为新根
    fn shrink_root(&mut self) {
        let root = self.root_mut();
        if root.is_index() && root.entries.len() == 1 {
            if let Some(Entry::Node { node, .. }) = root.entries.pop() {
                *self.root_mut() = node;
                debug!(depth = self.depth(), "root shrunk");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{city_locations, LabeledRect};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_delete_not_found() {
        let mut tree = RTree::new();

        // 空树上删除
        let missing = LabeledRect::new("missing", Rectangle::from_point(1.0, 1.0));
        assert_eq!(
            tree.delete(&missing).unwrap_err(),
            RTreeError::NotFound {
                id: "missing".to_string()
            }
        );

        // 有数据但ID不匹配
        tree.insert(LabeledRect::new("1", Rectangle::from_point(1.0, 1.0)));
        assert!(tree.delete(&missing).is_err());
        assert_eq!(tree.len(), 1);

        // 已删除的条目再删一次
        let one = LabeledRect::new("1", Rectangle::from_point(1.0, 1.0));
        tree.delete(&one).unwrap();
        assert!(tree.delete(&one).is_err());
    }

    #[test]
    fn test_delete_basic() {
        let mut tree = RTree::new();
        for i in 1..=5 {
            tree.insert(LabeledRect::new(
                i.to_string(),
                Rectangle::from_point(i as f64, i as f64),
            ));
        }

        let two = LabeledRect::new("2", Rectangle::from_point(2.0, 2.0));
        tree.delete(&two).unwrap();
        let four = LabeledRect::new("4", Rectangle::from_point(4.0, 4.0));
        tree.delete(&four).unwrap();

        assert_eq!(tree.len(), 3);
        tree.validate().unwrap();

        let all = tree.query(&Rectangle::new(0.0, 0.0, 10.0, 10.0));
        let mut ids: Vec<&str> = all.iter().map(|item| item.id()).collect();
        ids.sort_unstable();
        assert_eq!(ids, ["1", "3", "5"]);
    }

    #[test]
    fn test_delete_removes_colocated_duplicates() {
        let mut tree = RTree::new();
        let rect = Rectangle::from_point(3.0, 3.0);

        // 同一个叶子里的重复ID一次删除全部移除
        tree.insert(LabeledRect::new("dup", rect));
        tree.insert(LabeledRect::new("dup", rect));
        tree.insert(LabeledRect::new("other", Rectangle::from_point(4.0, 4.0)));
        assert_eq!(tree.len(), 3);

        tree.delete(&LabeledRect::new("dup", rect)).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.entries()[0].id(), "other");
    }

    #[test]
    fn test_delete_triggers_underflow_and_reinsert() {
        let mut tree = RTree::new();

        // 两簇相距很远的点，形成两个叶子
        let points = [
            ("1", 0.5, 0.5),
            ("2", 1.5, 1.0),
            ("3", 2.5, 0.7),
            ("4", 10.5, 10.5),
            ("5", 11.5, 11.0),
        ];
        for (id, x, y) in points {
            tree.insert(LabeledRect::new(id, Rectangle::from_point(x, y)));
        }
        assert_eq!(tree.depth(), 2);

        // 删除右簇的一个点，叶子下溢，剩余的点重插后仍然可查
        let five = LabeledRect::new("5", Rectangle::from_point(11.5, 11.0));
        tree.delete(&five).unwrap();

        assert_eq!(tree.len(), 4);
        tree.validate().unwrap();

        let all = tree.query(&Rectangle::new(0.0, 0.0, 15.0, 15.0));
        let mut ids: Vec<&str> = all.iter().map(|item| item.id()).collect();
        ids.sort_unstable();
        assert_eq!(ids, ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_delete_shrinks_root() {
        let mut tree = RTree::new();
        for i in 0..5 {
            let x = i as f64 * 2.0;
            tree.insert(LabeledRect::new(
                i.to_string(),
                Rectangle::from_point(x, 0.0),
            ));
        }
        assert_eq!(tree.depth(), 2);

        // 删到树重新只剩一层
        for i in 0..4 {
            let x = i as f64 * 2.0;
            let item = LabeledRect::new(i.to_string(), Rectangle::from_point(x, 0.0));
            tree.delete(&item).unwrap();
            tree.validate().unwrap();
        }

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.entries()[0].id(), "4");
    }

    #[test]
    fn test_delete_everything_leaves_empty_leaf_root() {
        let mut tree = RTree::new();
        let cities = city_locations();
        for city in &cities {
            tree.insert(city.clone());
        }

        for city in &cities {
            tree.delete(city).unwrap();
            tree.validate().unwrap();
        }

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.depth(), 1);
        assert!(tree
            .query(&Rectangle::new(-180.0, -90.0, 180.0, 90.0))
            .is_empty());
    }

    #[test]
    fn test_random_delete_stress_keeps_invariants() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut tree = RTree::new();
        let mut items = Vec::new();

        for i in 0..60 {
            let x = rng.gen_range(0.0..100.0);
            let y = rng.gen_range(0.0..100.0);
            let item = LabeledRect::new(format!("r{}", i), Rectangle::from_point(x, y));
            items.push(item.clone());
            tree.insert(item);
        }

        // 乱序逐个删除，每一步之后结构不变量都要成立
        for (step, item) in items.iter().rev().enumerate() {
            tree.delete(item).unwrap();
            tree.validate().unwrap();
            assert_eq!(tree.len(), items.len() - step - 1);
        }

        assert!(tree.is_empty());
    }
}
