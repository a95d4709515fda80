//! Unbalanced binary search tree.
//!
//! The tree always holds at least one value: it is built from an initial
//! value, and there is no removal. Equal values are inserted at most once;
//! a later insertion of an equal value leaves the tree untouched.
//!
//! The shape depends only on the insertion order. Inserting in sorted order
//! yields a chain whose height equals its length, so every traversal here
//! walks the tree with an explicit cursor or stack instead of recursion.
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new(10);
//! tree.extend([6, 13, 3, 9, 11, 16, 7]);
//!
//! assert_eq!(tree.search(&7).map(|node| *node.value()), Some(7));
//! assert!(tree.search(&-1).is_none());
//! assert!(tree.iter().copied().eq([3, 6, 7, 9, 10, 11, 13, 16]));
//! ```

use std::{
    borrow::Borrow,
    cmp::Ordering::{Equal, Greater, Less},
    fmt,
    iter::FusedIterator,
};

pub struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

pub struct OrderedTree<T> {
    root: Box<Node<T>>,
    len: usize,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(Self { value, left: None, right: None })
    }

    pub fn value(&self) -> &T { &self.value }
    pub fn left(&self) -> Option<&Node<T>> { self.left.as_deref() }
    pub fn right(&self) -> Option<&Node<T>> { self.right.as_deref() }

    fn children(&self) -> impl Iterator<Item = &Node<T>> {
        self.left().into_iter().chain(self.right())
    }
}

impl<T> OrderedTree<T> {
    pub fn new(value: T) -> Self { Self { root: Node::leaf(value), len: 1 } }

    pub fn root(&self) -> &Node<T> { &self.root }

    /// Number of values in the tree. Never zero.
    pub fn len(&self) -> usize { self.len }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut level = vec![&*self.root];
        let mut height = 0;
        while !level.is_empty() {
            height += 1;
            level =
                level.into_iter().flat_map(|node| node.children()).collect();
        }
        height
    }

    pub fn first(&self) -> &T {
        let mut node = &*self.root;
        while let Some(left) = node.left() {
            node = left;
        }
        &node.value
    }
    pub fn last(&self) -> &T {
        let mut node = &*self.root;
        while let Some(right) = node.right() {
            node = right;
        }
        &node.value
    }

    /// In-order traversal, ascending.
    pub fn iter(&self) -> Iter<'_, T> { Iter::new(&self.root, self.len) }
}

impl<T: Ord> OrderedTree<T> {
    /// Inserts `value` unless an equal value is already present.
    ///
    /// Returns `false` when the value was a duplicate, in which case the
    /// tree is left exactly as it was.
    pub fn insert(&mut self, value: T) -> bool {
        let mut node = &mut self.root;
        loop {
            let link = match value.cmp(&node.value) {
                Less => &mut node.left,
                Equal => return false,
                Greater => &mut node.right,
            };
            match link {
                Some(child) => node = child,
                None => {
                    *link = Some(Node::leaf(value));
                    self.len += 1;
                    return true;
                }
            }
        }
    }

    /// Returns the node holding a value equal to `value`, if any.
    ///
    /// Takes time proportional to the depth of the node reached.
    pub fn search<Q>(&self, value: &Q) -> Option<&Node<T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = Some(&*self.root);
        while let Some(cur) = node {
            node = match value.cmp(cur.value.borrow()) {
                Less => cur.left(),
                Equal => return Some(cur),
                Greater => cur.right(),
            };
        }
        None
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(value).is_some()
    }
}

impl<T: Ord> Extend<T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

// The derived drop glue would recurse once per level.
impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        let mut stack = vec![];
        stack.extend(self.root.left.take());
        stack.extend(self.root.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: &'a Node<T>, len: usize) -> Self {
        let mut iter = Self { stack: vec![], remaining: len };
        iter.push_left_spine(Some(root));
        iter
    }
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(cur) = node {
            self.stack.push(cur);
            node = cur.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(&node.value)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedTree<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_set().entries(self.iter()).finish()
    }
}
