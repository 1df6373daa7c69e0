//! Reorder operations over the Animations container.
//!
//! Positions are indices among the container's *Animation element*
//! children. Interleaved non-element nodes (comments, stray text) and
//! element children with other tags keep their slots; only Animation
//! order is meaningful here.

use log::warn;
use xmltree::{Element, XMLNode};

/// Attribute that identifies an Animation element within its container.
pub const NAME_ATTR: &str = "Name";

/// Tag of the elements whose order is being edited.
pub const ANIMATION_TAG: &str = "Animation";

fn is_animation(el: &Element) -> bool {
    el.name == ANIMATION_TAG
}

/// Shift direction for single-step moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn delta(self) -> isize {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}

/// Index of the named animation among the container's Animation
/// children. Elements with other tags are not part of the order, even
/// if they carry a Name attribute.
pub fn animation_index(container: &Element, name: &str) -> Option<usize> {
    container
        .children
        .iter()
        .filter_map(XMLNode::as_element)
        .filter(|el| is_animation(el))
        .position(|el| el.attributes.get(NAME_ATTR).map(String::as_str) == Some(name))
}

/// Vec positions of all Animation children, in order.
fn animation_positions(container: &Element) -> Vec<usize> {
    container
        .children
        .iter()
        .enumerate()
        .filter(|(_, node)| node.as_element().is_some_and(is_animation))
        .map(|(i, _)| i)
        .collect()
}

/// Move the named animation to `new_index`, clamped to the valid range.
///
/// All other children keep their relative order, and the moved element
/// carries its full attribute set and subtree with it. Returns true if
/// the element order changed.
///
/// A name that is not in the container is a caller bug: asserts in
/// debug builds, logged no-op in release.
pub fn move_animation(container: &mut Element, name: &str, new_index: usize) -> bool {
    let Some(current) = animation_index(container, name) else {
        debug_assert!(false, "animation {name:?} not in container");
        warn!("Move requested for unknown animation {:?}", name);
        return false;
    };

    let positions = animation_positions(container);
    let new_index = new_index.min(positions.len() - 1);
    if new_index == current {
        return false;
    }

    let node = container.children.remove(positions[current]);

    // Reinsert before the element now occupying the target index, or
    // after the last element when moving to the end.
    let remaining = animation_positions(container);
    let at = match remaining.get(new_index) {
        Some(&pos) => pos,
        None => remaining.last().map_or(container.children.len(), |&p| p + 1),
    };
    container.children.insert(at, node);
    true
}

/// Single-step shift built on [`move_animation`].
///
/// The clamp in `move_animation` makes Up at index 0 and Down at the
/// last index no-ops, whatever the step size. Returns true if the
/// order changed.
pub fn shift_animation(container: &mut Element, name: &str, direction: Direction) -> bool {
    let Some(current) = animation_index(container, name) else {
        debug_assert!(false, "animation {name:?} not in container");
        warn!("Shift requested for unknown animation {:?}", name);
        return false;
    };
    let target = current.saturating_add_signed(direction.delta());
    move_animation(container, name, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: build an Animations container with named entries, each
    /// carrying extra attributes and a child subtree, interleaved with
    /// text nodes the way a pretty-printed file would be.
    fn container(names: &[&str]) -> Element {
        let mut el = Element::new("Animations");
        for name in names {
            let mut anim = Element::new("Animation");
            anim.attributes
                .insert(NAME_ATTR.to_string(), (*name).to_string());
            anim.attributes
                .insert("FrameNum".to_string(), "10".to_string());
            let mut frame = Element::new("Frame");
            frame
                .attributes
                .insert("Delay".to_string(), "2".to_string());
            anim.children.push(XMLNode::Element(frame));
            el.children.push(XMLNode::Text("\n  ".to_string()));
            el.children.push(XMLNode::Element(anim));
        }
        el.children.push(XMLNode::Text("\n".to_string()));
        el
    }

    fn names(el: &Element) -> Vec<String> {
        el.children
            .iter()
            .filter_map(XMLNode::as_element)
            .filter(|a| a.name == ANIMATION_TAG)
            .filter_map(|a| a.attributes.get(NAME_ATTR).cloned())
            .collect()
    }

    #[test]
    fn test_shift_up_middle() {
        let mut el = container(&["A", "B", "C"]);
        assert!(shift_animation(&mut el, "B", Direction::Up));
        assert_eq!(names(&el), ["B", "A", "C"]);

        // Second scenario from the same chain
        assert!(shift_animation(&mut el, "C", Direction::Up));
        assert_eq!(names(&el), ["B", "C", "A"]);
    }

    #[test]
    fn test_shift_down() {
        let mut el = container(&["A", "B", "C"]);
        assert!(shift_animation(&mut el, "A", Direction::Down));
        assert_eq!(names(&el), ["B", "A", "C"]);
    }

    #[test]
    fn test_shift_round_trip() {
        let mut el = container(&["A", "B", "C", "D"]);
        let before = names(&el);
        assert!(shift_animation(&mut el, "C", Direction::Up));
        assert!(shift_animation(&mut el, "C", Direction::Down));
        assert_eq!(names(&el), before);
    }

    #[test]
    fn test_shift_first_up_is_noop() {
        let mut el = container(&["A", "B", "C"]);
        assert!(!shift_animation(&mut el, "A", Direction::Up));
        assert_eq!(names(&el), ["A", "B", "C"]);
    }

    #[test]
    fn test_shift_last_down_is_noop() {
        let mut el = container(&["A", "B", "C"]);
        assert!(!shift_animation(&mut el, "C", Direction::Down));
        assert_eq!(names(&el), ["A", "B", "C"]);
    }

    #[test]
    fn test_single_element_noops() {
        let mut el = container(&["A"]);
        assert!(!shift_animation(&mut el, "A", Direction::Up));
        assert!(!shift_animation(&mut el, "A", Direction::Down));
        assert_eq!(names(&el), ["A"]);
    }

    #[test]
    fn test_move_clamps_past_end() {
        let mut el = container(&["A", "B", "C"]);
        assert!(move_animation(&mut el, "A", 99));
        assert_eq!(names(&el), ["B", "C", "A"]);
    }

    #[test]
    fn test_move_to_front() {
        let mut el = container(&["A", "B", "C"]);
        assert!(move_animation(&mut el, "C", 0));
        assert_eq!(names(&el), ["C", "A", "B"]);
    }

    #[test]
    fn test_move_to_same_index_is_noop() {
        let mut el = container(&["A", "B", "C"]);
        assert!(!move_animation(&mut el, "B", 1));
        assert_eq!(names(&el), ["A", "B", "C"]);
    }

    #[test]
    fn test_move_preserves_content() {
        let mut el = container(&["A", "B", "C"]);
        let snapshot: Vec<Element> = el
            .children
            .iter()
            .filter_map(XMLNode::as_element)
            .cloned()
            .collect();

        assert!(shift_animation(&mut el, "B", Direction::Up));

        // Every element is structurally identical to its pre-move self,
        // the moved one included; only positions differ.
        for anim in el.children.iter().filter_map(XMLNode::as_element) {
            let name = anim.attributes.get(NAME_ATTR).unwrap();
            let original = snapshot
                .iter()
                .find(|s| s.attributes.get(NAME_ATTR) == Some(name))
                .unwrap();
            assert_eq!(anim, original);
        }
    }

    #[test]
    fn test_non_animation_children_are_not_part_of_the_order() {
        let mut el = container(&["A", "B"]);
        let mut defaults = Element::new("Defaults");
        defaults
            .attributes
            .insert(NAME_ATTR.to_string(), "Fallback".to_string());
        el.children.insert(0, XMLNode::Element(defaults));

        // A Name attribute on a non-Animation element does not make it
        // an entry in the order
        assert_eq!(animation_index(&el, "Fallback"), None);
        assert_eq!(animation_index(&el, "A"), Some(0));

        assert!(shift_animation(&mut el, "B", Direction::Up));
        assert_eq!(names(&el), ["B", "A"]);
        assert!(
            el.children
                .iter()
                .filter_map(XMLNode::as_element)
                .any(|e| e.name == "Defaults")
        );
    }

    #[test]
    fn test_animation_index() {
        let el = container(&["A", "B", "C"]);
        assert_eq!(animation_index(&el, "A"), Some(0));
        assert_eq!(animation_index(&el, "C"), Some(2));
        assert_eq!(animation_index(&el, "missing"), None);
    }
}
