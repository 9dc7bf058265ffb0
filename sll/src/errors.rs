// © 2026, ETH Zurich
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

error_chain! {
    errors {
        EmptyList {
            description("cannot delete from an empty list")
            display("Cannot delete from an empty list!")
        }

        IndexOutOfRange(position: usize, size: usize) {
            description("index out of range")
            display("Index {} is out of range. List has {} elements.", position, size)
        }
    }
}
