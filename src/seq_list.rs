use std::alloc::{self, Layout};
use std::fmt;
use std::ptr;

/// Errors that can occur in list operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("node allocation failed")]
    Allocation,

    #[error("list is empty")]
    Empty,
}

/// A singly-linked sequential list with head and tail access.
///
/// The head node is owned through an exclusive chain of boxes; `tail` is a
/// non-owning alias of the last node in that chain, kept current by every
/// structural mutation, so appending is O(1).
pub struct List<T> {
    head: Link<T>,
    tail: *mut Node<T>,
    length: usize,
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    data: T,
    next: Link<T>,
}

impl<T> Node<T> {
    // Fallible allocation: a failed request reports `Allocation` instead of
    // aborting the process. `next` is pointer-sized, so the layout is never
    // zero-sized.
    fn try_boxed(data: T) -> Result<Box<Node<T>>, ListError> {
        let layout = Layout::new::<Node<T>>();
        let raw = unsafe { alloc::alloc(layout) } as *mut Node<T>;
        if raw.is_null() {
            return Err(ListError::Allocation);
        }
        unsafe {
            raw.write(Node { data, next: None });
            Ok(Box::from_raw(raw))
        }
    }
}

impl<T> List<T> {
    pub fn new() -> List<T> {
        List {
            head: None,
            tail: ptr::null_mut(),
            length: 0,
        }
    }

    /// Builds a list of `len` copies of `fill`.
    pub fn with_size(len: usize, fill: T) -> Result<List<T>, ListError>
    where
        T: Clone,
    {
        let mut list = List::new();
        for _ in 0..len {
            list.push_back(fill.clone())?;
        }
        Ok(list)
    }

    /// Links a freshly allocated node in before the current head. On
    /// allocation failure the list is left exactly as it was.
    pub fn push_front(&mut self, data: T) -> Result<(), ListError> {
        let mut node = Node::try_boxed(data)?;
        if self.tail.is_null() {
            self.tail = &mut *node;
        }
        node.next = self.head.take();
        self.head = Some(node);
        self.length += 1;
        Ok(())
    }

    /// Links a freshly allocated node in after the current tail. On
    /// allocation failure the list is left exactly as it was.
    pub fn push_back(&mut self, data: T) -> Result<(), ListError> {
        let mut node = Node::try_boxed(data)?;
        let raw: *mut Node<T> = &mut *node;
        if self.tail.is_null() {
            self.head = Some(node);
        } else {
            // tail aliases the last node owned through head
            unsafe {
                (*self.tail).next = Some(node);
            }
        }
        self.tail = raw;
        self.length += 1;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// First element, or `Empty` if there is none.
    pub fn front(&self) -> Result<&T, ListError> {
        self.head
            .as_deref()
            .map(|node| &node.data)
            .ok_or(ListError::Empty)
    }

    pub fn front_mut(&mut self) -> Result<&mut T, ListError> {
        self.head
            .as_deref_mut()
            .map(|node| &mut node.data)
            .ok_or(ListError::Empty)
    }

    /// Last element, or `Empty` if there is none.
    pub fn back(&self) -> Result<&T, ListError> {
        if self.tail.is_null() {
            return Err(ListError::Empty);
        }
        unsafe { Ok(&(*self.tail).data) }
    }

    pub fn back_mut(&mut self) -> Result<&mut T, ListError> {
        if self.tail.is_null() {
            return Err(ListError::Empty);
        }
        unsafe { Ok(&mut (*self.tail).data) }
    }

    /// Unlinks and returns the front element, or `None` if the list is
    /// empty. O(1).
    pub fn pop_front(&mut self) -> Option<T> {
        let Node { data, next } = *self.head.take()?;
        self.head = next;
        if self.head.is_none() {
            self.tail = ptr::null_mut();
        }
        self.length -= 1;
        Some(data)
    }

    /// Unlinks and returns the back element, or `None` if the list is
    /// empty.
    ///
    /// O(n): with no backward links, reaching the predecessor of the tail
    /// takes a walk from the head. The tail alias only accelerates
    /// appending.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.length <= 1 {
            return self.pop_front();
        }
        // At least two nodes: walk to the one just before the tail.
        let mut node = self.head.as_deref_mut()?;
        while node.next.as_ref().map_or(false, |next| next.next.is_some()) {
            node = node.next.as_deref_mut()?;
        }
        let last = node.next.take()?;
        self.tail = node;
        self.length -= 1;
        Some(last.data)
    }

    /// Destroys every node. Teardown is iterative so a long chain cannot
    /// overflow the stack through recursive drops.
    pub fn clear(&mut self) {
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
        self.tail = ptr::null_mut();
        self.length = 0;
    }

    /// Deep copy into a freshly allocated, independent chain.
    pub fn try_clone(&self) -> Result<List<T>, ListError>
    where
        T: Clone,
    {
        let mut list = List::new();
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            list.push_back(node.data.clone())?;
            cursor = node.next.as_deref();
        }
        Ok(list)
    }
}

impl<T> Default for List<T> {
    fn default() -> List<T> {
        List::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> List<T> {
        match self.try_clone() {
            Ok(list) => list,
            // `clone` has no error channel; exhaustion ends the process the
            // way a failed std allocation does
            Err(_) => alloc::handle_alloc_error(Layout::new::<Node<T>>()),
        }
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    // Renders elements head to tail, each followed by a single space, with
    // no brackets or trailing newline. Consumers rely on this exact shape.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            write!(f, "{} ", node.data)?;
            cursor = node.next.as_deref();
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = f.debug_list();
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            entries.entry(&node.data);
            cursor = node.next.as_deref();
        }
        entries.finish()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &List<T>) -> bool {
        if self.length != other.length {
            return false;
        }
        let mut a = self.head.as_deref();
        let mut b = other.head.as_deref();
        while let (Some(node_a), Some(node_b)) = (a, b) {
            if node_a.data != node_b.data {
                return false;
            }
            a = node_a.next.as_deref();
            b = node_b.next.as_deref();
        }
        true
    }
}

impl<T: Eq> Eq for List<T> {}
