use slotmap::new_key_type;

new_key_type! {
    /// A generational handle to a node of a [`LinkedList`](super::LinkedList).
    ///
    /// Handles to removed nodes are never reused, so they can be detected rather than silently
    /// referring to whichever value later occupies the same storage.
    pub struct NodeKey;
}

pub(crate) type Link = Option<NodeKey>;

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link,
    pub next: Link,
}
