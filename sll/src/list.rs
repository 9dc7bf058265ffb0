// © 2026, ETH Zurich
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{
    display::DisplaySequence,
    errors::{ErrorKind, Result},
    node::{Link, Node},
};
use std::fmt;

/// A singly linked list that owns its chain of nodes.
///
/// `size` always equals the number of nodes reachable from `head`, and the
/// list is empty exactly when `head` is `None`.
pub struct LinkedList<T> {
    head: Link<T>,
    size: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList {
            head: None,
            size: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Attach a new node holding `value` after the current tail.
    pub fn append(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node::new(value)));
        self.size += 1;
    }

    /// Remove the node at the 1-based position `n` and return its value.
    ///
    /// Emptiness is checked before the position, so an empty list reports
    /// `EmptyList` for every `n`. The list is left untouched on failure.
    pub fn delete_nth(&mut self, n: usize) -> Result<T> {
        if self.is_empty() {
            bail!(ErrorKind::EmptyList);
        }
        if n < 1 || n > self.size {
            bail!(ErrorKind::IndexOutOfRange(n, self.size));
        }

        let removed = if n == 1 {
            Node::unlink(&mut self.head)
        } else {
            self.node_mut(n - 1)
                .and_then(|predecessor| Node::unlink(&mut predecessor.next))
        };
        match removed {
            Some(value) => {
                self.size -= 1;
                Ok(value)
            }
            None => unreachable!("list of size {} has no node at {}", self.size, n),
        }
    }

    /// The node at the 1-based `position`, reached by following `position - 1` links.
    fn node_mut(&mut self, position: usize) -> Option<&mut Node<T>> {
        let mut current = self.head.as_deref_mut();
        for _ in 1..position {
            current = current?.next.as_deref_mut();
        }
        current
    }

    fn traverse(&self) -> Traversal<'_, T> {
        Traversal {
            next: self.head.as_deref(),
        }
    }
}

impl<T: fmt::Display> LinkedList<T> {
    pub fn to_display_sequence(&self) -> DisplaySequence {
        if self.is_empty() {
            return DisplaySequence::Empty;
        }
        DisplaySequence::Values(self.traverse().map(|node| node.to_string()).collect())
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        LinkedList::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_display_sequence())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list()
            .entries(self.traverse().map(|node| &node.value))
            .finish()
    }
}

struct Traversal<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node
        })
    }
}
