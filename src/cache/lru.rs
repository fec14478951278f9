//! Recency List Module
//!
//! Index-arena doubly-linked list used to keep cache entries in
//! most-recently-used order with O(1) promotion, insertion and removal.

/// Sentinel slots in the arena.
const HEAD: usize = 0; // most-recently-used end
const TAIL: usize = 1; // least-recently-used end
const NULL: usize = usize::MAX;

#[derive(Debug)]
struct Node<T> {
    /// `None` for the sentinels and for freed slots.
    value: Option<T>,
    /// Index toward HEAD (more recently used).
    prev: usize,
    /// Index toward TAIL (less recently used).
    next: usize,
}

// == Recency List ==
/// Ordered sequence of values, front = most recently used, back = least
/// recently used.
///
/// Values live in a `Vec` and are addressed by stable slot indices, so the
/// key index can point straight at a slot without aliasing the nodes.
/// Freed slots are recycled through a free list.
#[derive(Debug)]
pub struct RecencyList<T> {
    /// Slot 0 = HEAD sentinel, slot 1 = TAIL sentinel, 2+ = values.
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecencyList<T> {
    // == Constructor ==
    /// Creates an empty list containing only the two sentinels.
    pub fn new() -> Self {
        let nodes = vec![
            Node {
                value: None,
                prev: NULL,
                next: TAIL,
            },
            Node {
                value: None,
                prev: HEAD,
                next: NULL,
            },
        ];

        Self {
            nodes,
            free: Vec::new(),
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts a value as most recently used and returns its slot index.
    pub fn push_front(&mut self, value: T) -> usize {
        let idx = match self.free.pop() {
            Some(idx) => {
                self.nodes[idx].value = Some(value);
                idx
            }
            None => {
                self.nodes.push(Node {
                    value: Some(value),
                    prev: NULL,
                    next: NULL,
                });
                self.nodes.len() - 1
            }
        };
        self.link_front(idx);
        self.len += 1;
        idx
    }

    // == Move To Front ==
    /// Marks the value at `idx` as most recently used.
    pub fn move_to_front(&mut self, idx: usize) {
        if !self.is_live(idx) || self.nodes[HEAD].next == idx {
            return;
        }
        self.unlink(idx);
        self.link_front(idx);
    }

    // == Remove ==
    /// Removes and returns the value at `idx`, freeing its slot.
    pub fn remove(&mut self, idx: usize) -> Option<T> {
        if !self.is_live(idx) {
            return None;
        }
        self.unlink(idx);
        self.free.push(idx);
        self.len -= 1;
        self.nodes[idx].value.take()
    }

    // == Back ==
    /// Returns the slot index of the least recently used value.
    pub fn back(&self) -> Option<usize> {
        let idx = self.nodes[TAIL].prev;
        (idx != HEAD).then_some(idx)
    }

    // == Get ==
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.nodes.get(idx).and_then(|node| node.value.as_ref())
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Iter ==
    /// Iterates from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut idx = self.nodes[HEAD].next;
        std::iter::from_fn(move || {
            if idx == TAIL {
                return None;
            }
            let node = &self.nodes[idx];
            idx = node.next;
            node.value.as_ref()
        })
    }

    fn is_live(&self, idx: usize) -> bool {
        idx > TAIL && self.get(idx).is_some()
    }

    fn link_front(&mut self, idx: usize) {
        let old_first = self.nodes[HEAD].next;
        self.nodes[idx].prev = HEAD;
        self.nodes[idx].next = old_first;
        self.nodes[HEAD].next = idx;
        self.nodes[old_first].prev = idx;
    }

    fn unlink(&mut self, idx: usize) {
        let prev = self.nodes[idx].prev;
        let next = self.nodes[idx].next;
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.nodes[idx].prev = NULL;
        self.nodes[idx].next = NULL;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn order(list: &RecencyList<&'static str>) -> Vec<&'static str> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_list_new() {
        let list: RecencyList<u32> = RecencyList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn test_push_front_orders_newest_first() {
        let mut list = RecencyList::new();
        list.push_front("a");
        list.push_front("b");
        list.push_front("c");

        assert_eq!(list.len(), 3);
        assert_eq!(order(&list), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_back_is_oldest() {
        let mut list = RecencyList::new();
        let a = list.push_front("a");
        list.push_front("b");

        assert_eq!(list.back(), Some(a));
        assert_eq!(list.get(a), Some(&"a"));
    }

    #[test]
    fn test_move_to_front() {
        let mut list = RecencyList::new();
        let a = list.push_front("a");
        list.push_front("b");
        list.push_front("c");

        list.move_to_front(a);

        assert_eq!(order(&list), vec!["a", "c", "b"]);
        assert_eq!(list.back().and_then(|idx| list.get(idx)), Some(&"b"));
    }

    #[test]
    fn test_move_to_front_already_first() {
        let mut list = RecencyList::new();
        list.push_front("a");
        let b = list.push_front("b");

        list.move_to_front(b);

        assert_eq!(order(&list), vec!["b", "a"]);
    }

    #[test]
    fn test_remove_middle() {
        let mut list = RecencyList::new();
        list.push_front("a");
        let b = list.push_front("b");
        list.push_front("c");

        assert_eq!(list.remove(b), Some("b"));
        assert_eq!(list.len(), 2);
        assert_eq!(order(&list), vec!["c", "a"]);
    }

    #[test]
    fn test_remove_twice_is_noop() {
        let mut list = RecencyList::new();
        let a = list.push_front("a");

        assert_eq!(list.remove(a), Some("a"));
        assert_eq!(list.remove(a), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_sentinel_is_noop() {
        let mut list = RecencyList::new();
        list.push_front("a");

        assert_eq!(list.remove(HEAD), None);
        assert_eq!(list.remove(TAIL), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_slots_are_reused() {
        let mut list = RecencyList::new();
        let a = list.push_front("a");
        list.remove(a);

        let b = list.push_front("b");

        assert_eq!(a, b);
        assert_eq!(order(&list), vec!["b"]);
    }

    #[test]
    fn test_drain_from_back() {
        let mut list = RecencyList::new();
        list.push_front("a");
        list.push_front("b");
        list.push_front("c");

        let mut drained = Vec::new();
        while let Some(idx) = list.back() {
            drained.extend(list.remove(idx));
        }

        assert_eq!(drained, vec!["a", "b", "c"]);
        assert!(list.is_empty());
    }
}
