// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction states and the per-state value bundle.

/// The interaction state a control is rendered in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ControlState {
    /// The resting state.
    #[default]
    Normal,
    /// The pointer is pressed on the control.
    Highlighted,
    /// The control is toggled on.
    Selected,
    /// The control does not accept interaction.
    Disabled,
}

impl ControlState {
    /// All states, in normal → highlighted → selected → disabled order.
    pub const ALL: [Self; 4] = [
        Self::Normal,
        Self::Highlighted,
        Self::Selected,
        Self::Disabled,
    ];
}

bitflags::bitflags! {
    /// A set of [`ControlState`]s.
    ///
    /// [`StateValues::populated`] reports which states of a bundle hold a
    /// value as one of these masks.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ControlStates: u8 {
        /// The resting state.
        const NORMAL      = 0b0000_0001;
        /// The pressed state.
        const HIGHLIGHTED = 0b0000_0010;
        /// The toggled-on state.
        const SELECTED    = 0b0000_0100;
        /// The non-interactive state.
        const DISABLED    = 0b0000_1000;
    }
}

impl From<ControlState> for ControlStates {
    fn from(state: ControlState) -> Self {
        match state {
            ControlState::Normal => Self::NORMAL,
            ControlState::Highlighted => Self::HIGHLIGHTED,
            ControlState::Selected => Self::SELECTED,
            ControlState::Disabled => Self::DISABLED,
        }
    }
}

/// An independent optional value per interaction state.
///
/// Each state is its own slot with no fallback between states: a bundle with
/// only `normal` set yields `None` for every other state, and choosing what
/// to render in that case is the consumer's policy, not this type's.
///
/// The fields are public and may be assigned directly; the accessors exist
/// for callers that hold a [`ControlState`] at runtime.
///
/// # Example
///
/// ```rust
/// use canopy_configuration::{ControlState, ControlStates, StateValues};
///
/// let mut title: StateValues<String> = StateValues::new();
/// title.normal = Some("OK".to_string());
/// title.set(ControlState::Disabled, "...".to_string());
///
/// assert_eq!(title.get(ControlState::Normal).map(String::as_str), Some("OK"));
/// assert_eq!(title.get(ControlState::Highlighted), None);
/// assert_eq!(title.populated(), ControlStates::NORMAL | ControlStates::DISABLED);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StateValues<T> {
    /// Value for the resting state.
    pub normal: Option<T>,
    /// Value for the pressed state.
    pub highlighted: Option<T>,
    /// Value for the toggled-on state.
    pub selected: Option<T>,
    /// Value for the non-interactive state.
    pub disabled: Option<T>,
}

impl<T> StateValues<T> {
    /// Creates a bundle with every state unset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            normal: None,
            highlighted: None,
            selected: None,
            disabled: None,
        }
    }

    /// Returns the value for a state, if set.
    #[must_use]
    #[inline]
    pub fn get(&self, state: ControlState) -> Option<&T> {
        match state {
            ControlState::Normal => self.normal.as_ref(),
            ControlState::Highlighted => self.highlighted.as_ref(),
            ControlState::Selected => self.selected.as_ref(),
            ControlState::Disabled => self.disabled.as_ref(),
        }
    }

    /// Returns a mutable reference to the value for a state, if set.
    #[must_use]
    #[inline]
    pub fn get_mut(&mut self, state: ControlState) -> Option<&mut T> {
        self.slot_mut(state).as_mut()
    }

    /// Sets the value for a state, returning the previous value.
    pub fn set(&mut self, state: ControlState, value: T) -> Option<T> {
        self.slot_mut(state).replace(value)
    }

    /// Clears the value for a state, returning it.
    pub fn clear(&mut self, state: ControlState) -> Option<T> {
        self.slot_mut(state).take()
    }

    /// Returns `true` if no state holds a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.populated().is_empty()
    }

    /// Returns the set of states that hold a value.
    #[must_use]
    pub fn populated(&self) -> ControlStates {
        let mut states = ControlStates::empty();
        for state in ControlState::ALL {
            if self.get(state).is_some() {
                states |= state.into();
            }
        }
        states
    }

    fn slot_mut(&mut self, state: ControlState) -> &mut Option<T> {
        match state {
            ControlState::Normal => &mut self.normal,
            ControlState::Highlighted => &mut self.highlighted,
            ControlState::Selected => &mut self.selected,
            ControlState::Disabled => &mut self.disabled,
        }
    }
}

impl<T> Default for StateValues<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};

    #[test]
    fn bundle_starts_empty() {
        let values: StateValues<u32> = StateValues::new();

        assert!(values.is_empty());
        assert_eq!(values.populated(), ControlStates::empty());
        for state in ControlState::ALL {
            assert_eq!(values.get(state), None);
        }
    }

    #[test]
    fn no_cross_state_inheritance() {
        let mut title: StateValues<String> = StateValues::new();
        title.normal = Some("OK".to_string());

        assert_eq!(title.get(ControlState::Normal).map(String::as_str), Some("OK"));
        assert_eq!(title.highlighted, None);
        assert_eq!(title.selected, None);
        assert_eq!(title.disabled, None);
    }

    #[test]
    fn set_returns_previous() {
        let mut values: StateValues<u32> = StateValues::new();

        assert_eq!(values.set(ControlState::Selected, 1), None);
        assert_eq!(values.set(ControlState::Selected, 2), Some(1));
        assert_eq!(values.selected, Some(2));
    }

    #[test]
    fn clear_removes_only_the_named_state() {
        let mut values: StateValues<u32> = StateValues::new();
        values.set(ControlState::Normal, 1);
        values.set(ControlState::Disabled, 2);

        assert_eq!(values.clear(ControlState::Disabled), Some(2));
        assert_eq!(values.normal, Some(1));
        assert_eq!(values.clear(ControlState::Disabled), None);
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut values: StateValues<u32> = StateValues::new();
        values.set(ControlState::Highlighted, 1);

        if let Some(value) = values.get_mut(ControlState::Highlighted) {
            *value = 9;
        }
        assert_eq!(values.highlighted, Some(9));
        assert_eq!(values.get_mut(ControlState::Normal), None);
    }

    #[test]
    fn populated_tracks_every_state() {
        let mut values: StateValues<u32> = StateValues::new();
        values.set(ControlState::Normal, 0);
        values.set(ControlState::Highlighted, 0);

        assert_eq!(
            values.populated(),
            ControlStates::NORMAL | ControlStates::HIGHLIGHTED
        );
        assert!(!values.is_empty());

        values.clear(ControlState::Normal);
        assert_eq!(values.populated(), ControlStates::HIGHLIGHTED);
    }

    #[test]
    fn state_mask_from_state() {
        assert_eq!(ControlStates::from(ControlState::Normal), ControlStates::NORMAL);
        assert_eq!(
            ControlStates::from(ControlState::Disabled),
            ControlStates::DISABLED
        );
    }

    #[test]
    fn all_order_is_stable() {
        assert_eq!(
            ControlState::ALL,
            [
                ControlState::Normal,
                ControlState::Highlighted,
                ControlState::Selected,
                ControlState::Disabled,
            ]
        );
    }
}
