/*
 * SPDX-FileCopyrightText: 2026 structstream contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::cell::RefCell;
use std::rc::Rc;

use structstream::prelude::*;

/// A two-level tree (root -> a -> b) where each level reserves a 4-byte
/// length placeholder for its child, and the child's write-back handler
/// patches that placeholder once the child's own size is final. Verifies
/// the patches run depth-first, post-order: `b` into `a` before `a` into
/// `root`.
#[test]
fn write_back_patches_depth_first_post_order() {
    let order = Rc::new(RefCell::new(Vec::<&'static str>::new()));

    let mut root = MemStream::new_writer(16);
    let anchor_root = root.pos();
    root.write_u4be(0).unwrap();

    let mut a = ChildStream::new_writer(16);
    let anchor_a = a.pos();
    a.write_u4be(0).unwrap();

    let mut b = ChildStream::new_writer(16);
    b.write_bytes(b"hello world").unwrap();
    let b_len = b.pos() as u32;

    let order_b = order.clone();
    b.set_write_back_handler(anchor_a, move |parent| {
        order_b.borrow_mut().push("b");
        parent.seek(anchor_a)?;
        parent.write_bytes(&b_len.to_be_bytes())
    });

    a.add_child_stream(b);
    a.write_bytes(b"suffix").unwrap();
    let a_len = a.pos() as u32;

    let order_a = order.clone();
    a.set_write_back_handler(anchor_root, move |parent| {
        order_a.borrow_mut().push("a");
        parent.seek(anchor_root)?;
        parent.write_bytes(&a_len.to_be_bytes())
    });

    root.add_child_stream(a);
    root.write_back_child_streams().unwrap();

    assert_eq!(*order.borrow(), vec!["b", "a"]);

    let bytes = root.into_bytes();
    assert_eq!(u32::from_be_bytes(bytes[0..4].try_into().unwrap()), a_len);
    assert_eq!(a_len, 4 + b"suffix".len() as u32);
    assert_eq!(b_len, 11);
}

#[test]
fn write_back_with_no_children_is_a_no_op() {
    let mut s = MemStream::new_writer(4);
    s.write_u4be(42).unwrap();
    s.write_back_child_streams().unwrap();
    assert_eq!(s.into_bytes(), 42u32.to_be_bytes().to_vec());
}
