//! Collapses raw zone records into per-price-string aggregates.
//!
//! Raw records carry unrounded prices. Reporting happens on the two-decimal
//! canonical string, so records that round to the same string merge into one
//! zone: counts add up and the prior-resistance flag is OR-ed.

use std::cmp::Ordering;

use itertools::Itertools;

use crate::models::{RawResistance, RawSupport, ResistanceZone, SupportZone};
use crate::utils::maths_utils::{canonical_price, canonical_value};

pub fn aggregate_supports(raw: &[RawSupport]) -> Vec<SupportZone> {
    let mut zones: Vec<SupportZone> = raw
        .iter()
        .into_group_map_by(|record| canonical_price(record.price))
        .into_iter()
        .map(|(zone, members)| {
            // Members share a canonical string, so any of them yields the
            // same numeric price once rounded.
            let price = canonical_value(members[0].price);
            SupportZone {
                zone,
                bounce_count: members.iter().map(|m| m.bounce_count).sum(),
                confirmed_resistance: members.iter().any(|m| m.confirmed_resistance),
                price,
            }
        })
        .collect();

    zones.sort_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal));
    zones
}

pub fn aggregate_resistances(raw: &[RawResistance]) -> Vec<ResistanceZone> {
    let mut zones: Vec<ResistanceZone> = raw
        .iter()
        .into_group_map_by(|record| canonical_price(record.price))
        .into_iter()
        .map(|(zone, members)| {
            let price = canonical_value(members[0].price);
            ResistanceZone {
                zone,
                drop_count: members.iter().map(|m| m.drop_count).sum(),
                price,
            }
        })
        .collect();

    zones.sort_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal));
    zones
}
