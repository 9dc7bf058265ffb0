// © 2026, ETH Zurich
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single element of a `LinkedList`, owned by its predecessor.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Node { value, next: None }
    }

    /// Detach the node behind `link`, splicing its successor into its place.
    pub(crate) fn unlink(link: &mut Link<T>) -> Option<T> {
        link.take().map(|node| {
            let node = *node;
            *link = node.next;
            node.value
        })
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
