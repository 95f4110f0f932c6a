//! Cargo allocation: pick the value-maximizing set of resources that fits the hold.
//!
//! The hold is modelled as a 0/1 knapsack over integer weight slots. Resources are
//! pre-ordered by value density so ties in the table resolve deterministically.

use serde::{Deserialize, Serialize};

use super::entities::Resource;

/// Hold size used when the caller does not configure one.
pub const DEFAULT_CAPACITY: u32 = 100;

/// A resource chosen for transport.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedResource {
    pub name: String,
    pub availability: f64,
    pub price: f64,
    /// Integer weight the resource occupies in the hold.
    pub weight: usize,
    /// Value contributed to the allocation total.
    pub value: f64,
    pub selected_amount: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationResult {
    pub selected: Vec<SelectedResource>,
    pub total_value: f64,
    pub total_weight: usize,
}

struct Candidate<'a> {
    resource: &'a Resource,
    weight: usize,
    value: f64,
}

/// Selects resources under `capacity`, valuing each at
/// `availability * price * fuel_efficiency / 100`.
pub fn allocate(resources: &[Resource], fuel_efficiency: f64, capacity: u32) -> AllocationResult {
    if resources.is_empty() {
        return AllocationResult::default();
    }

    let capacity = capacity as usize;
    let factor = fuel_efficiency / 100.0;

    let mut candidates: Vec<Candidate<'_>> = resources
        .iter()
        .map(|resource| Candidate {
            resource,
            weight: resource.slot_weight(),
            value: resource.stock_value() * factor,
        })
        .collect();
    // Stable: equal densities keep their input order.
    candidates.sort_by(|a, b| density(b.resource).total_cmp(&density(a.resource)));

    let n = candidates.len();
    let width = capacity + 1;
    let mut best = vec![0.0_f64; (n + 1) * width];
    let mut taken = vec![false; (n + 1) * width];

    for (i, candidate) in candidates.iter().enumerate() {
        let row = (i + 1) * width;
        let prev = i * width;
        for w in 0..=capacity {
            let skip = best[prev + w];
            best[row + w] = skip;
            if candidate.weight <= w {
                let take = best[prev + w - candidate.weight] + candidate.value;
                if take > skip {
                    best[row + w] = take;
                    taken[row + w] = true;
                }
            }
        }
    }

    let mut selected = Vec::new();
    let mut remaining = capacity;
    for i in (1..=n).rev() {
        if taken[i * width + remaining] {
            let candidate = &candidates[i - 1];
            selected.push(select(candidate, capacity));
            remaining -= candidate.weight;
        }
    }
    selected.reverse();

    AllocationResult {
        selected,
        total_value: best[n * width + capacity],
        total_weight: capacity - remaining,
    }
}

fn density(resource: &Resource) -> f64 {
    resource.stock_value() / resource.effective_weight()
}

fn select(candidate: &Candidate<'_>, capacity: usize) -> SelectedResource {
    let fits = (capacity / candidate.weight) as f64;
    SelectedResource {
        name: candidate.resource.name.clone(),
        availability: candidate.resource.availability,
        price: candidate.resource.price,
        weight: candidate.weight,
        value: candidate.value,
        selected_amount: candidate.resource.availability.min(fits),
    }
}
