//! Threads the flattened hierarchy for stackless traversal.
//!
//! The shader walks the array following two links per node: `next`, the node
//! to test after this one, and `exit`, the node to jump to when this node's
//! whole subtree can be skipped (its bounding box missed the ray). Because
//! the builder numbers nodes in pre-order, `next` is always the following
//! array slot and `exit` can be derived from the parent links alone.

use crate::gpu;

/// Fills in the `next` and `exit` links of every node, in place.
///
/// Link assignment, over nodes in index order:
///
/// - the root gets `next = 1` and `exit = NONE` (missing the root box means
///   the whole tree misses);
/// - every other node except the last gets `next = index + 1`;
/// - a leaf's `exit` is its `next` (nothing to skip);
/// - an internal left child exits into its parent's right child;
/// - an internal right child exits into its grandparent's right child; with
///   no grandparent there is nothing to skip into and `exit` stays `NONE`;
/// - the last node gets `next = exit = NONE`.
///
/// The result depends only on the tree topology, so threading an already
/// threaded array is a no-op.
///
/// # Panics
///
/// Panics if the array was not produced by [`super::bvh_builder::build`]'s
/// indexing discipline (root at slot 0, pre-order indices, leaf xor
/// internal); such an array is a programming error, not a recoverable
/// condition.
pub fn thread(hitboxes: &mut gpu::HitBoxes) {
    validate(hitboxes);

    let last = (hitboxes.count - 1) as usize;

    if last == 0 {
        hitboxes.nodes[0].next = gpu::HitBox::NONE;
        hitboxes.nodes[0].exit = gpu::HitBox::NONE;

        return;
    }

    hitboxes.nodes[0].next = 1;
    hitboxes.nodes[0].exit = gpu::HitBox::NONE;

    for i in 1..last {
        let node = hitboxes.nodes[i];
        let next = node.index + 1;

        let exit = if node.is_leaf() {
            next
        } else {
            let parent = hitboxes.nodes[node.parent as usize];

            if parent.left == node.index {
                parent.right
            } else if parent.parent != gpu::HitBox::NONE {
                hitboxes.nodes[parent.parent as usize].right
            } else {
                gpu::HitBox::NONE
            }
        };

        hitboxes.nodes[i].next = next;
        hitboxes.nodes[i].exit = exit;
    }

    hitboxes.nodes[last].next = gpu::HitBox::NONE;
    hitboxes.nodes[last].exit = gpu::HitBox::NONE;
}

fn validate(hitboxes: &gpu::HitBoxes) {
    assert!(hitboxes.count > 0, "cannot thread an empty hitbox array");

    for (i, node) in hitboxes.nodes().iter().enumerate() {
        let i = i as i32;

        assert_eq!(i, node.index, "hitbox {i} is not stored at its own index");

        if i == 0 {
            assert_eq!(
                gpu::HitBox::NONE,
                node.parent,
                "the root hitbox has a parent"
            );
        } else {
            assert!(
                node.parent >= 0 && node.parent < i,
                "hitbox {i} is not numbered in pre-order"
            );
        }

        if node.is_leaf() {
            assert!(node.sphere >= 0, "leaf hitbox {i} wraps no sphere");
        } else {
            assert!(
                node.left > i && node.right > i && node.sphere == gpu::HitBox::NONE,
                "internal hitbox {i} is malformed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{vec3, Vec3};

    use super::super::bvh_builder;
    use super::*;

    fn sphere(x: f32, index: i32) -> gpu::Sphere {
        gpu::Sphere::new(
            vec3(x, 0.0, 0.0),
            0.5,
            index,
            gpu::Material::diffuse(Vec3::ONE),
        )
    }

    fn build(n: i32) -> gpu::HitBoxes {
        let spheres: Vec<_> = (0..n).map(|i| sphere(i as f32, i)).collect();
        let mut out = gpu::HitBoxes::default();

        bvh_builder::build(&spheres, &mut out).unwrap();

        out
    }

    #[test]
    fn single_node_gets_the_last_node_links() {
        let mut hitboxes = build(1);

        thread(&mut hitboxes);

        assert_eq!(gpu::HitBox::NONE, hitboxes.nodes[0].next);
        assert_eq!(gpu::HitBox::NONE, hitboxes.nodes[0].exit);
    }

    #[test]
    fn next_is_the_following_slot() {
        let mut hitboxes = build(8);

        thread(&mut hitboxes);

        let last = hitboxes.count - 1;

        for node in hitboxes.nodes() {
            if node.index == last {
                assert_eq!(gpu::HitBox::NONE, node.next);
            } else {
                assert_eq!(node.index + 1, node.next);
            }
        }
    }

    #[test]
    fn three_sphere_links() {
        // Tree: root(0) { leaf(1), node(2) { leaf(3), leaf(4) } }
        let mut hitboxes = build(3);

        thread(&mut hitboxes);

        let links: Vec<_> = hitboxes
            .nodes()
            .iter()
            .map(|node| (node.next, node.exit))
            .collect();

        assert_eq!(
            vec![
                // Root: no skip target
                (1, gpu::HitBox::NONE),
                // Leaf: exit == next
                (2, 2),
                // Right child of the root: no grandparent to exit into
                (3, gpu::HitBox::NONE),
                // Leaf: exit == next
                (4, 4),
                // Last node
                (gpu::HitBox::NONE, gpu::HitBox::NONE),
            ],
            links
        );
    }

    #[test]
    fn left_internal_child_exits_into_its_sibling() {
        let mut hitboxes = build(4);

        thread(&mut hitboxes);

        for node in hitboxes.nodes() {
            if node.is_leaf() || node.index == 0 {
                continue;
            }

            let parent = hitboxes.nodes[node.parent as usize];

            if parent.left == node.index {
                assert_eq!(parent.right, node.exit);
            }
        }
    }

    #[test]
    fn right_internal_child_exits_into_the_grandparent_sibling() {
        // 8 spheres give three levels of internal nodes, so some internal
        // right child has an internal parent
        let mut hitboxes = build(8);

        thread(&mut hitboxes);

        let mut checked = 0;

        for node in hitboxes.nodes() {
            if node.is_leaf() || node.index == 0 || node.index == hitboxes.count - 1 {
                continue;
            }

            let parent = hitboxes.nodes[node.parent as usize];

            if parent.right != node.index {
                continue;
            }

            if parent.parent == gpu::HitBox::NONE {
                assert_eq!(gpu::HitBox::NONE, node.exit);
            } else {
                let grandparent = hitboxes.nodes[parent.parent as usize];

                assert_eq!(grandparent.right, node.exit);
            }

            checked += 1;
        }

        assert!(checked > 0);
    }

    #[test]
    fn threading_is_idempotent() {
        let mut once = build(7);

        thread(&mut once);

        let mut twice = once;

        thread(&mut twice);

        assert_eq!(once, twice);
    }

    #[test]
    #[should_panic(expected = "pre-order")]
    fn rejects_foreign_node_layouts() {
        let mut hitboxes = build(3);

        // A parent pointing forward cannot come out of the builder
        hitboxes.nodes[1].parent = 4;

        thread(&mut hitboxes);
    }

    #[test]
    #[should_panic(expected = "root hitbox has a parent")]
    fn rejects_a_rooted_slot_zero() {
        let mut hitboxes = build(3);

        hitboxes.nodes[0].parent = 1;

        thread(&mut hitboxes);
    }
}
