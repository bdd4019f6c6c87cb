//! Marker types.

/// Marker type describing an entity creation.
#[derive(Clone, Copy, Debug)]
pub struct Creation;

/// Marker type describing an entity modification.
#[derive(Clone, Copy, Debug)]
pub struct Modification;

/// Marker type describing a payment.
#[derive(Clone, Copy, Debug)]
pub struct Payment;

/// Marker type describing a shipment.
#[derive(Clone, Copy, Debug)]
pub struct Shipment;

/// Marker type describing a completion.
#[derive(Clone, Copy, Debug)]
pub struct Completion;
