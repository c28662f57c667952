use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Unique key for every node in a [`FrontChain`]
    pub struct FrontKey;
}

#[derive(Clone, Copy, Debug)]
struct FrontNode {
    /// Index of the placed circle this node represents
    circle: usize,
    prev: FrontKey,
    next: FrontKey,
}

/// The frontier of an arrangement: a circular, doubly linked chain of placed circles
/// forming the outer boundary, in counter-clockwise order.
/// Circles dropped from the chain are removed from it entirely and can no longer serve as anchors.
#[derive(Clone, Debug)]
pub struct FrontChain {
    nodes: SlotMap<FrontKey, FrontNode>,
}

impl FrontChain {
    /// Creates a chain of three mutually tangent circles, given in counter-clockwise order
    pub fn triangle(c0: usize, c1: usize, c2: usize) -> (Self, [FrontKey; 3]) {
        let mut nodes = SlotMap::with_key();
        let keys = [c0, c1, c2].map(|circle| {
            nodes.insert(FrontNode {
                circle,
                prev: FrontKey::default(),
                next: FrontKey::default(),
            })
        });
        for (i, key) in keys.iter().enumerate() {
            let node = &mut nodes[*key];
            node.next = keys[(i + 1) % 3];
            node.prev = keys[(i + 2) % 3];
        }
        (Self { nodes }, keys)
    }

    pub fn next(&self, key: FrontKey) -> FrontKey {
        self.nodes[key].next
    }

    pub fn prev(&self, key: FrontKey) -> FrontKey {
        self.nodes[key].prev
    }

    /// Index of the placed circle at `key`
    pub fn circle(&self, key: FrontKey) -> usize {
        self.nodes[key].circle
    }

    /// Links `a` directly to `b`, dropping all nodes in between from the chain
    pub fn link(&mut self, a: FrontKey, b: FrontKey) {
        debug_assert!(a != b, "a node cannot be linked to itself");
        let mut dropped = self.next(a);
        while dropped != b {
            let next = self.next(dropped);
            self.nodes.remove(dropped);
            dropped = next;
        }
        self.nodes[a].next = b;
        self.nodes[b].prev = a;
    }

    /// Inserts a node for `circle` between the linked nodes `a` and `b`
    pub fn insert_between(&mut self, a: FrontKey, b: FrontKey, circle: usize) -> FrontKey {
        debug_assert!(self.next(a) == b, "nodes are not linked");
        let key = self.nodes.insert(FrontNode {
            circle,
            prev: a,
            next: b,
        });
        self.nodes[a].next = key;
        self.nodes[b].prev = key;
        key
    }

    /// Iterates over the chain starting from `start`, in counter-clockwise order
    pub fn iter_from(&self, start: FrontKey) -> impl Iterator<Item = FrontKey> + '_ {
        let mut current = Some(start);
        std::iter::from_fn(move || {
            let key = current?;
            let next = self.next(key);
            current = (next != start).then_some(next);
            Some(key)
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
