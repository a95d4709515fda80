use std::borrow::Borrow;

pub struct SortedVecSet<T>(Vec<T>);

impl<T: Ord> SortedVecSet<T> {
    pub fn new() -> Self { Self(vec![]) }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn len(&self) -> usize { self.0.len() }

    pub fn insert(&mut self, value: T) -> bool {
        match self.0.binary_search(&value) {
            Ok(_) => false,
            Err(i) => {
                self.0.insert(i, value);
                true
            }
        }
    }
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.0.binary_search_by(|x| x.borrow().cmp(value)).is_ok()
    }
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ { self.0.iter() }
}

impl<T: Ord> Default for SortedVecSet<T> {
    fn default() -> Self { Self::new() }
}

#[test]
fn sanity_check() {
    let mut set = SortedVecSet::new();
    assert!(set.is_empty());
    assert!(set.insert(3));
    assert!(set.insert(1));
    assert!(!set.insert(3));
    assert!(set.insert(2));
    assert_eq!(set.len(), 3);
    assert!(set.contains(&2));
    assert!(!set.contains(&4));
    assert!(set.iter().copied().eq([1, 2, 3]));
}

#[test]
fn borrowed_contains() {
    let mut set = SortedVecSet::new();
    assert!(set.insert("peach".to_owned()));
    assert!(set.insert("apple".to_owned()));
    assert!(set.contains("peach"));
    assert!(!set.contains("kiwi"));
}
