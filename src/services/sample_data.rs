//! Demonstration weeks loaded into an empty store.

use crate::models::metrics::{ClientMetrics, MarketingMetrics, MetricGroups, ModMetrics, ResourceMetrics};
use crate::models::weekly::WeeklyRecord;

type MarketingRow = [i64; 12];
type ClientRow = [i64; 5];
type ResourceRow = [i64; 4];
type ModRow = [i64; 2];

const SAMPLE_WEEKS: [(&str, &str, MarketingRow, ClientRow, ResourceRow, ModRow); 9] = [
    ("2025-10-06", "2025-10-10", [45000, 5, 3, 2, 1, 2, 1, 320, 4, 2, 3, 1], [2, 3, 4, 3, 1], [12, 42, 3, 6], [2, 2]),
    ("2025-10-13", "2025-10-17", [52000, 7, 4, 3, 2, 3, 2, 380, 5, 3, 4, 2], [3, 2, 5, 4, 2], [15, 50, 4, 8], [3, 1]),
    ("2025-10-20", "2025-10-24", [48000, 6, 3, 2, 1, 2, 1, 350, 4, 2, 3, 1], [2, 4, 3, 3, 1], [13, 45, 3, 7], [1, 2]),
    ("2025-10-27", "2025-10-31", [55000, 8, 4, 4, 3, 3, 2, 400, 6, 3, 5, 2], [4, 3, 6, 5, 2], [18, 55, 5, 10], [2, 3]),
    ("2025-11-03", "2025-11-07", [50000, 7, 3, 3, 2, 2, 1, 360, 5, 2, 4, 1], [3, 2, 4, 3, 1], [14, 48, 4, 8], [2, 1]),
    ("2025-11-10", "2025-11-14", [58000, 9, 5, 4, 3, 4, 3, 420, 7, 3, 6, 2], [5, 3, 7, 5, 3], [20, 60, 6, 11], [3, 2]),
    ("2025-11-17", "2025-11-21", [54000, 8, 4, 3, 2, 3, 2, 390, 6, 2, 5, 2], [4, 2, 5, 4, 2], [16, 52, 5, 9], [2, 2]),
    ("2025-11-24", "2025-11-28", [46000, 6, 3, 2, 1, 2, 1, 330, 4, 2, 3, 1], [2, 3, 3, 2, 1], [11, 40, 3, 6], [1, 1]),
    ("2025-12-01", "2025-12-05", [52000, 7, 4, 3, 2, 3, 2, 370, 5, 3, 4, 2], [3, 3, 4, 3, 1], [15, 50, 4, 8], [2, 2]),
];

/// Sample records, stamped 10:00 UTC on each week's Friday.
pub fn sample_weeks() -> Vec<WeeklyRecord> {
    SAMPLE_WEEKS
        .iter()
        .map(|(start, end, marketing, client, resource, mods)| {
            let stamp = format!("{end}T10:00:00Z");
            WeeklyRecord {
                week_start: (*start).to_string(),
                week_end: (*end).to_string(),
                metrics: MetricGroups {
                    marketing: marketing_from(marketing),
                    client: ClientMetrics {
                        requirement_new: client[0],
                        requirement_old: client[1],
                        submit_profiles: client[2],
                        schedule_interview: client[3],
                        start_contract: client[4],
                    },
                    resource: ResourceMetrics {
                        total_reachout: resource[0],
                        register_on_live_d365: resource[1],
                        inquiry_post_linked_in: resource[2],
                        submit_profiles_by_krishna: resource[3],
                    },
                    mods: ModMetrics {
                        partner_registration: mods[0],
                        client_registration: mods[1],
                    },
                },
                created_at: stamp.clone(),
                updated_at: stamp,
            }
        })
        .collect()
}

fn marketing_from(row: &MarketingRow) -> MarketingMetrics {
    MarketingMetrics {
        emails_sent: row[0],
        positive_replies: row[1],
        negative_replies: row[2],
        total_meeting_schedule: row[3],
        meeting_success: row[4],
        new_account_introduction_total: row[5],
        new_account_introduction_success: row[6],
        client_reachout: row[7],
        client_reachout_positive: row[8],
        client_reachout_negative: row[9],
        kanbox_positive: row[10],
        kanbox_negative: row[11],
    }
}
