//! Traversal of nested layer trees.

use std::slice;

/// A layer that may own nested child layers.
///
/// The child relation is expected to be acyclic. This is guaranteed by the owning engine and is not
/// checked here.
pub trait LayerNode: Sized {
    /// Direct children of the layer. Layers without children return an empty slice.
    fn children(&self) -> &[Self];
}

/// Input of the flattening functions: a single layer or a sequence of layers.
#[derive(Debug)]
pub enum LayerInput<'a, T> {
    /// A single root layer.
    Single(&'a T),
    /// A sequence of root layers.
    Many(&'a [T]),
}

impl<T> Clone for LayerInput<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for LayerInput<'_, T> {}

impl<'a, T> From<&'a [T]> for LayerInput<'a, T> {
    fn from(layers: &'a [T]) -> Self {
        Self::Many(layers)
    }
}

impl<'a, T> From<&'a Vec<T>> for LayerInput<'a, T> {
    fn from(layers: &'a Vec<T>) -> Self {
        Self::Many(layers)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for LayerInput<'a, T> {
    fn from(layers: &'a [T; N]) -> Self {
        Self::Many(layers)
    }
}

/// Depth-first, left-to-right preorder iterator over a layer tree.
///
/// Created by [`preorder`].
#[derive(Debug)]
pub struct Preorder<'a, T> {
    stack: Vec<slice::Iter<'a, T>>,
}

impl<'a, T: LayerNode> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some(layer) => {
                    let children = layer.children();
                    if !children.is_empty() {
                        self.stack.push(children.iter());
                    }

                    return Some(layer);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Lazily walks every layer of the input and all of its descendants in preorder.
pub fn preorder<'a, T: LayerNode>(input: impl Into<LayerInput<'a, T>>) -> Preorder<'a, T> {
    let roots = match input.into() {
        LayerInput::Single(layer) => slice::from_ref(layer),
        LayerInput::Many(layers) => layers,
    };

    Preorder {
        stack: vec![roots.iter()],
    }
}

/// Returns every layer of the input followed by its descendants, in preorder.
///
/// A layer reachable through several paths is returned once per path.
pub fn flatten<'a, T: LayerNode>(input: impl Into<LayerInput<'a, T>>) -> Vec<&'a T> {
    preorder(input).collect()
}
