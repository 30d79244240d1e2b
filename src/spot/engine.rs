//! Spot Engine
//! Orchestrates collection, listing, matching and suppression of Separation
//! colorants. The engine holds no state; each call borrows the object pool
//! only for its own duration.

use lopdf::{Document, Object};
use tracing::{debug, info, instrument};

use super::collector::collect;
use super::matcher::{must_disable, FilterSpec};
use super::names::{display_name, normalize};
use super::suppressor::{disable_in_document, separation_name};
use crate::types::{ColorantReference, ColorantSet, SpotInfo, SpotOutcome};

/// Lists the display names of all Separation colorants, in discovery order.
pub fn list_spots(doc: &Document) -> Vec<String> {
    describe_spots(doc)
        .into_iter()
        .map(|spot| spot.display_name)
        .collect()
}

/// Describes every well-formed Separation colorant reachable from the pages.
#[instrument(skip(doc))]
pub fn describe_spots(doc: &Document) -> Vec<SpotInfo> {
    let colorants = collect(doc);
    let spots: Vec<SpotInfo> = colorants
        .iter()
        .filter_map(|reference| spot_info(doc, *reference))
        .collect();
    debug!(
        "{} of {} color space references are Separation colorants",
        spots.len(),
        colorants.len()
    );
    spots
}

/// Disables every colorant whose name matches `spec`. Returns how many
/// arrays were actually rewritten.
pub fn disable_matching(doc: &mut Document, spec: &FilterSpec) -> usize {
    disable_matching_report(doc, spec)
        .iter()
        .filter(|outcome| outcome.disabled)
        .count()
}

/// Disables every Separation colorant in the document.
pub fn disable_all(doc: &mut Document) -> usize {
    disable_matching(doc, &FilterSpec::MatchAll)
}

/// Runs a disable pass and returns the outcome for every Separation colorant
/// considered, in discovery order.
#[instrument(skip(doc))]
pub fn disable_matching_report(doc: &mut Document, spec: &FilterSpec) -> Vec<SpotOutcome> {
    let colorants: ColorantSet = collect(doc);
    let mut outcomes = Vec::with_capacity(colorants.len());

    for reference in &colorants {
        let Some(spot) = spot_info(doc, *reference) else {
            continue;
        };

        let disabled = must_disable(&spot.display_name, spec) && disable_in_document(doc, *reference);
        if disabled {
            info!("Disabled spot color \"{}\" ({})", spot.display_name, reference);
        } else {
            debug!("Kept spot color \"{}\" ({})", spot.display_name, reference);
        }
        outcomes.push(SpotOutcome { spot, disabled });
    }

    outcomes
}

fn spot_info(doc: &Document, reference: ColorantReference) -> Option<SpotInfo> {
    let array = match doc.get_object(reference.object_id()) {
        Ok(Object::Array(array)) => array,
        _ => return None,
    };
    let raw = separation_name(array)?;
    let display = display_name(raw);

    Some(SpotInfo {
        reference,
        raw_name: String::from_utf8_lossy(raw).into_owned(),
        normalized_name: normalize(&display),
        display_name: display,
    })
}
