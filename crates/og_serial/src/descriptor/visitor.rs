use crate::descriptor::{CopyRefDescriptor, NullDescriptor, ObjectDescriptor, PrimitiveDescriptor};

// -----------------------------------------------------------------------------
// DescriptorVisitor

/// An operation over descriptor trees, one method per kind.
///
/// See [`Descriptor::accept`](crate::descriptor::Descriptor::accept).
/// Adding a kind adds a method here, so every visitor has to handle it.
pub trait DescriptorVisitor {
    /// The result of visiting one node.
    type Output;

    fn visit_null(&mut self, descriptor: &NullDescriptor) -> Self::Output;

    fn visit_primitive(&mut self, descriptor: &PrimitiveDescriptor) -> Self::Output;

    fn visit_copy_ref(&mut self, descriptor: &CopyRefDescriptor) -> Self::Output;

    fn visit_object(&mut self, descriptor: &ObjectDescriptor) -> Self::Output;
}
