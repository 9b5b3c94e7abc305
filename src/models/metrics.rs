//! Metric schema for weekly records.
//!
//! Every group enumerates its fields explicitly. Aggregation and validation
//! walk these lists, so a stored record carrying extra keys contributes
//! nothing for them and a record missing a key contributes zero.

use serde::{Deserialize, Serialize};

macro_rules! define_metric_group {
    ($(#[$meta:meta])* $name:ident { $($field:ident => $key:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $name {
            $(pub $field: i64,)+
        }

        impl $name {
            /// Wire names of every field, in display order.
            pub const FIELDS: &'static [&'static str] = &[$($key),+];

            pub fn get(&self, key: &str) -> Option<i64> {
                match key {
                    $($key => Some(self.$field),)+
                    _ => None,
                }
            }

            pub fn accumulate(&mut self, other: &Self) {
                $(self.$field = self.$field.saturating_add(other.$field);)+
            }

            pub fn first_negative(&self) -> Option<&'static str> {
                $(if self.$field < 0 {
                    return Some($key);
                })+
                None
            }
        }
    };
}

define_metric_group!(
    /// Outreach and meeting counters.
    MarketingMetrics {
        emails_sent => "emailsSent",
        positive_replies => "positiveReplies",
        negative_replies => "negativeReplies",
        total_meeting_schedule => "totalMeetingSchedule",
        meeting_success => "meetingSuccess",
        new_account_introduction_total => "newAccountIntroductionTotal",
        new_account_introduction_success => "newAccountIntroductionSuccess",
        client_reachout => "clientReachout",
        client_reachout_positive => "clientReachoutPositive",
        client_reachout_negative => "clientReachoutNegative",
        kanbox_positive => "kanboxPositive",
        kanbox_negative => "kanboxNegative",
    }
);

define_metric_group!(
    /// Client pipeline counters.
    ClientMetrics {
        requirement_new => "requirementNew",
        requirement_old => "requirementOld",
        submit_profiles => "submitProfiles",
        schedule_interview => "scheduleInterview",
        start_contract => "startContract",
    }
);

define_metric_group!(
    /// Resource sourcing counters.
    ResourceMetrics {
        total_reachout => "totalReachout",
        register_on_live_d365 => "registerOnLiveD365",
        inquiry_post_linked_in => "inquiryPostLinkedIn",
        submit_profiles_by_krishna => "submitProfilesByKrishna",
    }
);

define_metric_group!(
    /// Partner and client registrations.
    ModMetrics {
        partner_registration => "partnerRegistration",
        client_registration => "clientRegistration",
    }
);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MetricGroup {
    Marketing,
    Client,
    Resource,
    Mod,
}

impl MetricGroup {
    pub const ALL: [MetricGroup; 4] = [
        MetricGroup::Marketing,
        MetricGroup::Client,
        MetricGroup::Resource,
        MetricGroup::Mod,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricGroup::Marketing => "marketing",
            MetricGroup::Client => "client",
            MetricGroup::Resource => "resource",
            MetricGroup::Mod => "mod",
        }
    }

    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            MetricGroup::Marketing => MarketingMetrics::FIELDS,
            MetricGroup::Client => ClientMetrics::FIELDS,
            MetricGroup::Resource => ResourceMetrics::FIELDS,
            MetricGroup::Mod => ModMetrics::FIELDS,
        }
    }
}

impl std::fmt::Display for MetricGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for MetricGroup {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "marketing" => Ok(MetricGroup::Marketing),
            "client" => Ok(MetricGroup::Client),
            "resource" => Ok(MetricGroup::Resource),
            "mod" => Ok(MetricGroup::Mod),
            other => Err(format!("unsupported metric group: {other}")),
        }
    }
}

/// The four metric groups captured for one week, or summed over a period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricGroups {
    pub marketing: MarketingMetrics,
    pub client: ClientMetrics,
    pub resource: ResourceMetrics,
    #[serde(rename = "mod")]
    pub mods: ModMetrics,
}

impl MetricGroups {
    pub fn accumulate(&mut self, other: &MetricGroups) {
        self.marketing.accumulate(&other.marketing);
        self.client.accumulate(&other.client);
        self.resource.accumulate(&other.resource);
        self.mods.accumulate(&other.mods);
    }

    pub fn value(&self, group: MetricGroup, key: &str) -> Option<i64> {
        match group {
            MetricGroup::Marketing => self.marketing.get(key),
            MetricGroup::Client => self.client.get(key),
            MetricGroup::Resource => self.resource.get(key),
            MetricGroup::Mod => self.mods.get(key),
        }
    }

    /// Returns `group.field` of the first negative counter, if any.
    pub fn first_negative(&self) -> Option<String> {
        let found = [
            (MetricGroup::Marketing, self.marketing.first_negative()),
            (MetricGroup::Client, self.client.first_negative()),
            (MetricGroup::Resource, self.resource.first_negative()),
            (MetricGroup::Mod, self.mods.first_negative()),
        ];
        found
            .into_iter()
            .find_map(|(group, field)| field.map(|field| format!("{group}.{field}")))
    }

    pub fn is_zero(&self) -> bool {
        *self == MetricGroups::default()
    }
}
