// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use phf::{phf_ordered_map, OrderedMap};

/// A zone offered by the picker. Nothing in the record or timeline logic
/// requires a zone to be listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub zone_id: &'static str,
    pub label: &'static str,
    pub group: &'static str,
}

macro_rules! entry {
    ($zone_id:literal, $label:literal, $group:literal) => {
        CatalogEntry {
            zone_id: $zone_id,
            label: $label,
            group: $group,
        }
    };
}

static COMMON_TIMEZONES: OrderedMap<&'static str, CatalogEntry> = phf_ordered_map! {
    "America/New_York" => entry!("America/New_York", "New York (EST/EDT)", "North America"),
    "America/Los_Angeles" => entry!("America/Los_Angeles", "Los Angeles (PST/PDT)", "North America"),
    "America/Chicago" => entry!("America/Chicago", "Chicago (CST/CDT)", "North America"),
    "America/Denver" => entry!("America/Denver", "Denver (MST/MDT)", "North America"),
    "America/Toronto" => entry!("America/Toronto", "Toronto (EST/EDT)", "North America"),
    "America/Vancouver" => entry!("America/Vancouver", "Vancouver (PST/PDT)", "North America"),

    "Europe/London" => entry!("Europe/London", "London (GMT/BST)", "Europe"),
    "Europe/Paris" => entry!("Europe/Paris", "Paris (CET/CEST)", "Europe"),
    "Europe/Berlin" => entry!("Europe/Berlin", "Berlin (CET/CEST)", "Europe"),
    "Europe/Rome" => entry!("Europe/Rome", "Rome (CET/CEST)", "Europe"),
    "Europe/Madrid" => entry!("Europe/Madrid", "Madrid (CET/CEST)", "Europe"),
    "Europe/Amsterdam" => entry!("Europe/Amsterdam", "Amsterdam (CET/CEST)", "Europe"),
    "Europe/Stockholm" => entry!("Europe/Stockholm", "Stockholm (CET/CEST)", "Europe"),
    "Europe/Moscow" => entry!("Europe/Moscow", "Moscow (MSK)", "Europe"),
    "Europe/Istanbul" => entry!("Europe/Istanbul", "Istanbul (TRT)", "Europe"),

    "Asia/Tokyo" => entry!("Asia/Tokyo", "Tokyo (JST)", "Asia"),
    "Asia/Shanghai" => entry!("Asia/Shanghai", "Shanghai (CST)", "Asia"),
    "Asia/Seoul" => entry!("Asia/Seoul", "Seoul (KST)", "Asia"),
    "Asia/Hong_Kong" => entry!("Asia/Hong_Kong", "Hong Kong (HKT)", "Asia"),
    "Asia/Singapore" => entry!("Asia/Singapore", "Singapore (SGT)", "Asia"),
    "Asia/Dubai" => entry!("Asia/Dubai", "Dubai (GST)", "Asia"),
    "Asia/Kolkata" => entry!("Asia/Kolkata", "Mumbai (IST)", "Asia"),
    "Asia/Bangkok" => entry!("Asia/Bangkok", "Bangkok (ICT)", "Asia"),

    "Australia/Sydney" => entry!("Australia/Sydney", "Sydney (AEST/AEDT)", "Australia"),
    "Australia/Melbourne" => entry!("Australia/Melbourne", "Melbourne (AEST/AEDT)", "Australia"),
    "Australia/Perth" => entry!("Australia/Perth", "Perth (AWST)", "Australia"),

    "Pacific/Auckland" => entry!("Pacific/Auckland", "Auckland (NZST/NZDT)", "Pacific"),
    "Pacific/Honolulu" => entry!("Pacific/Honolulu", "Honolulu (HST)", "Pacific"),

    "Africa/Cairo" => entry!("Africa/Cairo", "Cairo (EET/EEST)", "Africa"),
    "Africa/Johannesburg" => entry!("Africa/Johannesburg", "Johannesburg (SAST)", "Africa"),

    "America/Sao_Paulo" => entry!("America/Sao_Paulo", "São Paulo (BRT/BRST)", "South America"),
    "America/Argentina/Buenos_Aires" => entry!("America/Argentina/Buenos_Aires", "Buenos Aires (ART)", "South America"),
};

/// Catalog entries in display order.
pub fn common_timezones() -> impl Iterator<Item = &'static CatalogEntry> {
    COMMON_TIMEZONES.values()
}

pub fn lookup(zone_id: &str) -> Option<&'static CatalogEntry> {
    COMMON_TIMEZONES.get(zone_id)
}

/// Entries whose label or zone id contains `term`, ignoring case.
pub fn search(term: &str) -> Vec<&'static CatalogEntry> {
    let term = term.trim().to_lowercase();
    common_timezones()
        .filter(|entry| {
            entry.label.to_lowercase().contains(&term)
                || entry.zone_id.to_lowercase().contains(&term)
        })
        .collect()
}

/// Group entries by region, regions in order of first appearance.
pub fn grouped<'a, I>(entries: I) -> Vec<(&'static str, Vec<&'a CatalogEntry>)>
where
    I: IntoIterator<Item = &'a CatalogEntry>,
{
    let mut groups: Vec<(&'static str, Vec<&'a CatalogEntry>)> = Vec::new();
    for entry in entries {
        match groups.iter_mut().find(|(group, _)| *group == entry.group) {
            Some((_, members)) => members.push(entry),
            None => groups.push((entry.group, vec![entry])),
        }
    }
    groups
}

/// Name shown for a newly added zone: the custom name if one was typed,
/// otherwise the city part of the catalog label, otherwise the zone id.
pub fn default_display_name(zone_id: &str, custom: Option<&str>) -> String {
    if let Some(custom) = custom.map(str::trim).filter(|name| !name.is_empty()) {
        return custom.to_string();
    }
    match lookup(zone_id) {
        Some(entry) => entry
            .label
            .split(" (")
            .next()
            .unwrap_or(entry.label)
            .to_string(),
        None => zone_id.to_string(),
    }
}
