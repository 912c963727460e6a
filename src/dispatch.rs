//! Tag validation for tagged element sequences.
//!
//! A `&[Element]` is checked once at entry and unwrapped into a typed column,
//! so the engine runs on `Vec<String>`, `Vec<i64>` or `Vec<f64>` and never
//! looks at a tag again.

use crate::core::Element;
use crate::error::{Result, SortError};

/// A validated, unwrapped copy of a homogeneous element sequence.
#[derive(Clone, Debug, PartialEq)]
pub enum Homogeneous {
    Empty,
    Texts(Vec<String>),
    Integers(Vec<i64>),
    Floats(Vec<f64>),
}

impl Homogeneous {
    /// Copies `elements` into a typed column in a single pass.
    ///
    /// Fails with [`SortError::MixedOrUnsupportedType`] naming the first
    /// element whose tag differs from the first element's.
    pub fn from_elements(elements: &[Element]) -> Result<Self> {
        let Some(first) = elements.first() else {
            return Ok(Homogeneous::Empty);
        };
        let expected = first.tag();
        let mismatch = |index: usize, found: &Element| SortError::MixedOrUnsupportedType {
            expected,
            found: found.tag(),
            index,
        };

        let mut column = match first {
            Element::Text(_) => Homogeneous::Texts(Vec::with_capacity(elements.len())),
            Element::Integer(_) => Homogeneous::Integers(Vec::with_capacity(elements.len())),
            Element::Float(_) => Homogeneous::Floats(Vec::with_capacity(elements.len())),
        };

        for (index, element) in elements.iter().enumerate() {
            match (&mut column, element) {
                (Homogeneous::Texts(v), Element::Text(s)) => v.push(s.clone()),
                (Homogeneous::Integers(v), Element::Integer(x)) => v.push(*x),
                (Homogeneous::Floats(v), Element::Float(x)) => v.push(*x),
                (_, other) => return Err(mismatch(index, other)),
            }
        }

        Ok(column)
    }

    /// Re-tags the column.
    pub fn into_elements(self) -> Vec<Element> {
        match self {
            Homogeneous::Empty => Vec::new(),
            Homogeneous::Texts(v) => v.into_iter().map(Element::Text).collect(),
            Homogeneous::Integers(v) => v.into_iter().map(Element::Integer).collect(),
            Homogeneous::Floats(v) => v.into_iter().map(Element::Float).collect(),
        }
    }
}
