use crate::button::Button;
use crate::debouncer::InputPin;
use crate::time::{TimeInstant, TimeSource};

/// An identifier for a button within a collection.
///
/// This is a simple wrapper around `usize` that provides type safety for
/// button identifiers. Users specify button IDs when adding buttons to a
/// collection, and use these IDs to query specific buttons afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonId(pub usize);

impl From<usize> for ButtonId {
    fn from(id: usize) -> Self {
        ButtonId(id)
    }
}

impl From<ButtonId> for usize {
    fn from(id: ButtonId) -> Self {
        id.0
    }
}

/// Errors that can occur during collection operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CollectionError {
    /// The specified button ID does not exist in the collection.
    InvalidButtonId(ButtonId),

    /// Attempted to add a button with an ID that already exists.
    DuplicateButtonId(ButtonId),

    /// The button ID exceeds the collection's capacity.
    ButtonIdOutOfBounds { id: ButtonId, capacity: usize },
}

impl core::fmt::Display for CollectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CollectionError::InvalidButtonId(id) => {
                write!(f, "button ID {} does not exist in collection", id.0)
            }
            CollectionError::DuplicateButtonId(id) => {
                write!(f, "button ID {} already exists in collection", id.0)
            }
            CollectionError::ButtonIdOutOfBounds { id, capacity } => {
                write!(
                    f,
                    "button ID {} exceeds collection capacity of {}",
                    id.0, capacity
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CollectionError {}

/// Manages a set of independent buttons behind stable IDs.
///
/// This is a convenience wrapper for hosts with several buttons: it polls
/// them all with one call per loop iteration and routes per-button queries
/// by `ButtonId`. Each button keeps its own sources, intervals, and state;
/// the collection adds no cross-button logic.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `P` - Input pin implementation type (must be same for all buttons)
/// * `T` - Time source implementation type
/// * `MAX_BUTTONS` - Maximum number of buttons this collection can hold
pub struct ButtonCollection<'t, I, P, T, const MAX_BUTTONS: usize>
where
    I: TimeInstant,
    P: InputPin,
    T: TimeSource<I>,
{
    buttons: [Option<Button<'t, I, P, T>>; MAX_BUTTONS],
}

impl<'t, I, P, T, const MAX_BUTTONS: usize> ButtonCollection<'t, I, P, T, MAX_BUTTONS>
where
    I: TimeInstant,
    P: InputPin,
    T: TimeSource<I>,
{
    /// Creates a new empty button collection.
    pub fn new() -> Self {
        Self {
            buttons: core::array::from_fn(|_| None),
        }
    }

    /// Adds a button to the collection under the specified ID.
    ///
    /// # Errors
    /// * `DuplicateButtonId` - A button with this ID already exists
    /// * `ButtonIdOutOfBounds` - The ID exceeds the collection's capacity
    pub fn add_button(
        &mut self,
        id: ButtonId,
        button: Button<'t, I, P, T>,
    ) -> Result<(), CollectionError> {
        let idx = id.0;

        if idx >= MAX_BUTTONS {
            return Err(CollectionError::ButtonIdOutOfBounds {
                id,
                capacity: MAX_BUTTONS,
            });
        }

        if self.buttons[idx].is_some() {
            return Err(CollectionError::DuplicateButtonId(id));
        }

        self.buttons[idx] = Some(button);
        Ok(())
    }

    /// Polls every button in the collection once.
    ///
    /// Call this once per control-loop iteration instead of updating each
    /// button individually.
    pub fn update_all(&mut self) {
        for button in self.buttons.iter_mut().flatten() {
            button.update();
        }
    }

    /// Returns whether the specified button settled a press this cycle.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the collection.
    pub fn just_pressed(&self, id: ButtonId) -> Result<bool, CollectionError> {
        self.get(id).map(Button::just_pressed)
    }

    /// Returns whether the specified button is currently held.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the collection.
    pub fn is_held(&self, id: ButtonId) -> Result<bool, CollectionError> {
        self.get(id).map(Button::is_held)
    }

    /// Returns whether the specified button settled a release this cycle.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the collection.
    pub fn just_released(&self, id: ButtonId) -> Result<bool, CollectionError> {
        self.get(id).map(Button::just_released)
    }

    /// Returns a reference to the specified button.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the collection.
    pub fn get(&self, id: ButtonId) -> Result<&Button<'t, I, P, T>, CollectionError> {
        let idx = id.0;

        if idx >= MAX_BUTTONS {
            return Err(CollectionError::InvalidButtonId(id));
        }

        self.buttons[idx]
            .as_ref()
            .ok_or(CollectionError::InvalidButtonId(id))
    }

    /// Returns the number of buttons currently in the collection.
    pub fn len(&self) -> usize {
        self.buttons.iter().filter(|b| b.is_some()).count()
    }

    /// Returns true if the collection contains no buttons.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the collection contains a button with the given ID.
    pub fn contains(&self, id: ButtonId) -> bool {
        let idx = id.0;
        idx < MAX_BUTTONS && self.buttons[idx].is_some()
    }
}

impl<'t, I, P, T, const MAX_BUTTONS: usize> Default for ButtonCollection<'t, I, P, T, MAX_BUTTONS>
where
    I: TimeInstant,
    P: InputPin,
    T: TimeSource<I>,
{
    fn default() -> Self {
        Self::new()
    }
}
