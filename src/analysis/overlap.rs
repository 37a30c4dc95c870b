//! Support/resistance overlap matching.
//!
//! A support with a resistance sitting within 5% of it marks a price region
//! where both behaviors were observed. These get a combined record keyed by
//! the support's price string; each matching pair adds the full counts of
//! both sides to that record.

use std::cmp::Ordering;

use crate::config::{DetectorConfig, debug};
use crate::models::{OVERLAP_KIND, OverlapZone, ResistanceZone, SupportZone};
use crate::utils::maths_utils::relative_diff;

/// Pairs every support with every resistance and folds the matches into one
/// record per support price string. The tolerance denominator is the support
/// price, so matching is not symmetric between the two sides.
pub fn match_overlaps(
    supports: &[SupportZone],
    resistances: &[ResistanceZone],
    config: &DetectorConfig,
) -> Vec<OverlapZone> {
    let mut overlaps: Vec<OverlapZone> = Vec::new();

    for support in supports {
        for resistance in resistances {
            let distance = relative_diff(resistance.price, support.price);
            if distance > config.overlap.tolerance_pct {
                continue;
            }
            if debug::PRINT_OVERLAP_MATCHES {
                log::debug!(
                    "overlap: support {} and resistance {} within {:.4}",
                    support.zone,
                    resistance.zone,
                    distance
                );
            }

            match overlaps.iter_mut().find(|o| o.zone == support.zone) {
                Some(existing) => {
                    existing.support_bounce_count += support.bounce_count;
                    existing.resistance_drop_count += resistance.drop_count;
                }
                None => overlaps.push(OverlapZone {
                    zone: support.zone.clone(),
                    support_bounce_count: support.bounce_count,
                    resistance_drop_count: resistance.drop_count,
                    kind: OVERLAP_KIND,
                    price: support.price,
                }),
            }
        }
    }

    overlaps.sort_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal));
    overlaps
}
