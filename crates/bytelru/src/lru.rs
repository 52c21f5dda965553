//! Recency list backing the cache
//!
//! Doubly-linked list stored in a slab of slots. Nodes are addressed by
//! stable `usize` indices so the key index can point straight at them and
//! move-to-front/removal stay O(1).

/// Node in the recency list
struct Node<T> {
    item: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Slab-backed doubly-linked list, front = most recently used
pub(crate) struct LruList<T> {
    nodes: Vec<Option<Node<T>>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_list: Vec<usize>,
    len: usize,
}

impl<T> LruList<T> {
    /// Create an empty list
    pub(crate) fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
            free_list: Vec::new(),
            len: 0,
        }
    }

    /// Number of linked nodes
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Insert an item at the front and return its slot index
    pub(crate) fn push_front(&mut self, item: T) -> usize {
        let idx = self.alloc_node();
        self.nodes[idx] = Some(Node {
            item,
            prev: None,
            next: self.head,
        });
        self.link_front(idx);
        self.len += 1;
        idx
    }

    /// Index of the least recently used node
    pub(crate) fn back(&self) -> Option<usize> {
        self.tail
    }

    pub(crate) fn get(&self, idx: usize) -> Option<&T> {
        self.nodes.get(idx)?.as_ref().map(|node| &node.item)
    }

    pub(crate) fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.nodes.get_mut(idx)?.as_mut().map(|node| &mut node.item)
    }

    /// Mark a node as most recently used
    pub(crate) fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) || self.get(idx).is_none() {
            return;
        }

        self.unlink(idx);
        if let Some(node) = &mut self.nodes[idx] {
            node.prev = None;
            node.next = self.head;
        }
        self.link_front(idx);
    }

    /// Detach the least recently used node and hand back its item
    pub(crate) fn pop_back(&mut self) -> Option<T> {
        let idx = self.tail?;
        self.remove(idx)
    }

    /// Detach the node at `idx`; its slot goes back on the free list
    pub(crate) fn remove(&mut self, idx: usize) -> Option<T> {
        self.get(idx)?;
        self.unlink(idx);
        let node = self.nodes[idx].take()?;
        self.free_list.push(idx);
        self.len -= 1;
        Some(node.item)
    }

    /// Drop every node
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Walk the list from most to least recently used
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    fn link_front(&mut self, idx: usize) {
        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.nodes[head_idx] {
                head.prev = Some(idx);
            }
        }

        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = if let Some(node) = &self.nodes[idx] {
            (node.prev, node.next)
        } else {
            return;
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = &mut self.nodes[prev_idx] {
                    prev_node.next = next;
                }
            }
            None => {
                self.head = next;
            }
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = &mut self.nodes[next_idx] {
                    next_node.prev = prev;
                }
            }
            None => {
                self.tail = prev;
            }
        }
    }

    fn alloc_node(&mut self) -> usize {
        if let Some(idx) = self.free_list.pop() {
            idx
        } else {
            let idx = self.nodes.len();
            self.nodes.push(None);
            idx
        }
    }
}

/// Front-to-back iterator over list items
pub(crate) struct Iter<'a, T> {
    list: &'a LruList<T>,
    cursor: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let list = self.list;
        let node = list.nodes[idx].as_ref()?;
        self.cursor = node.next;
        Some(&node.item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(list: &LruList<&'static str>) -> Vec<&'static str> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_push_front_order() {
        let mut list = LruList::new();

        list.push_front("a");
        list.push_front("b");
        list.push_front("c");

        assert_eq!(items(&list), vec!["c", "b", "a"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_move_to_front() {
        let mut list = LruList::new();

        let a = list.push_front("a");
        list.push_front("b");
        list.push_front("c");
        list.move_to_front(a);

        assert_eq!(items(&list), vec!["a", "c", "b"]);
        assert_eq!(list.get(list.back().unwrap()), Some(&"b"));
    }

    #[test]
    fn test_move_head_is_noop() {
        let mut list = LruList::new();

        list.push_front("a");
        let b = list.push_front("b");
        list.move_to_front(b);

        assert_eq!(items(&list), vec!["b", "a"]);
    }

    #[test]
    fn test_pop_back() {
        let mut list = LruList::new();

        list.push_front("a");
        list.push_front("b");

        assert_eq!(list.pop_back(), Some("a"));
        assert_eq!(list.pop_back(), Some("b"));
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.len(), 0);
        assert!(list.back().is_none());
    }

    #[test]
    fn test_remove_middle() {
        let mut list = LruList::new();

        list.push_front("a");
        let b = list.push_front("b");
        list.push_front("c");

        assert_eq!(list.remove(b), Some("b"));
        assert_eq!(list.remove(b), None);
        assert_eq!(items(&list), vec!["c", "a"]);
    }

    #[test]
    fn test_slot_reuse() {
        let mut list = LruList::new();

        let a = list.push_front("a");
        list.push_front("b");
        list.remove(a);
        let c = list.push_front("c");

        assert_eq!(a, c);
        assert_eq!(items(&list), vec!["c", "b"]);
    }

    #[test]
    fn test_get_mut() {
        let mut list = LruList::new();

        let a = list.push_front("a");
        if let Some(item) = list.get_mut(a) {
            *item = "z";
        }

        assert_eq!(list.get(a), Some(&"z"));
    }

    #[test]
    fn test_clear() {
        let mut list = LruList::new();

        list.push_front("a");
        list.push_front("b");
        list.clear();

        assert_eq!(list.len(), 0);
        assert!(list.iter().next().is_none());
        assert!(list.back().is_none());
    }
}
