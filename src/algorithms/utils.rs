use crate::node::{Entry, Node};
use crate::rtree::{RTree, Spatial};

/// 路径导航与MBR维护的共用工具
///
/// 下降路径用从根节点出发的子节点下标序列表示，空路径就是根节点。
/// 这样所有对祖先的回溯都不需要在节点里保存父指针。
impl<T: Spatial> RTree<T> {
    /// 获取路径末端节点的可变引用
    ///
    /// 路径失效说明树的结构被破坏，属于内部错误，直接panic
    pub(crate) fn node_mut(&mut self, path: &[usize]) -> &mut Node<T> {
        let mut current = self.root_mut().as_mut();

        for &index in path {
            current = match current.entries.get_mut(index) {
                Some(Entry::Node { node, .. }) => node,
                _ => panic!("corrupted tree path: {:?}", path),
            };
        }

        current
    }

    /// 向上调整树 - 从路径末端的节点开始逐层重算MBR直到根节点
    ///
    /// 每一层除了重算节点自身的MBR，还要把它同步到父节点中指向它的
    /// 条目上，保证两份MBR始终一致。
    pub(crate) fn adjust_tree_upward(&mut self, mut path: Vec<usize>) {
        loop {
            let node = self.node_mut(&path);
            node.update_mbr();
            let mbr = node.mbr;

            let Some(index) = path.pop() else {
                // 根节点已经更新完毕
                break;
            };

            let parent = self.node_mut(&path);
            if let Some(Entry::Node { mbr: entry_mbr, .. }) = parent.entries.get_mut(index) {
                *entry_mbr = mbr;
            }
        }
    }
}
