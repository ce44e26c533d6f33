use std::cmp::Reverse;

use ordered_float::OrderedFloat;

use crate::entities::{PartInstance, PartRequest};

/// Expands every request into one [`PartInstance`] per physical unit and establishes
/// the deterministic processing order: descending height, then descending width,
/// ties broken by original insertion order (stable sort).
///
/// Placing tall parts first approximates shelf-style packing efficiency
/// (first-fit-decreasing adapted to shelves).
pub fn expand_and_order(requests: &[PartRequest]) -> Vec<PartInstance> {
    let mut instances = Vec::with_capacity(requests.iter().map(|r| r.quantity).sum());
    for request in requests {
        for _ in 0..request.quantity {
            instances.push(PartInstance {
                id: instances.len(),
                request_id: request.id,
                width: request.width,
                height: request.height,
            });
        }
    }
    instances.sort_by_key(|inst| {
        (
            Reverse(OrderedFloat(inst.height)),
            Reverse(OrderedFloat(inst.width)),
        )
    });
    instances
}
