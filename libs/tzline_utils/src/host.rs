// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use chrono_tz::Tz;
use tracing::{trace, warn};

/// Resolve the zone of the machine we are running on, UTC when unknown.
pub fn host_zone() -> Tz {
    let name = iana_time_zone::get_timezone().ok();
    host_zone_from(name.as_deref())
}

/// Resolve an explicit zone name, UTC when absent or not a known IANA id.
pub fn host_zone_from(name: Option<&str>) -> Tz {
    let Some(name) = name else {
        trace!("No host timezone available, using UTC");
        return chrono_tz::UTC;
    };
    match name.parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            warn!(zone_id = name, "Unrecognized host timezone, using UTC");
            chrono_tz::UTC
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_zone_from_name() {
        assert_eq!(host_zone_from(Some("Asia/Tokyo")), chrono_tz::Asia::Tokyo);
        assert_eq!(host_zone_from(Some("Invalid/Timezone")), chrono_tz::UTC);
        assert_eq!(host_zone_from(None), chrono_tz::UTC);
    }

    #[test]
    fn test_host_zone_resolves() {
        assert!(!host_zone().name().is_empty());
    }
}
