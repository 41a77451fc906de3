use std::fmt::{Display, Formatter};

use num_format::{Locale, ToFormattedString};

use crate::{
    analytics::CountEntry,
    invariants::{Endpoint, Minute, Status},
};

/// The three aggregation tables produced by one run, rendered in the order
/// the original reports them: endpoint, minute, status.
pub struct CallReport {
    pub by_endpoint: Vec<CountEntry<Endpoint>>,
    pub by_minute: Vec<CountEntry<Minute>>,
    pub by_status: Vec<CountEntry<Status>>,
}

impl Display for CallReport {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> core::fmt::Result {
        write_table(
            formatter,
            "API Calls by Endpoint",
            "Endpoint",
            &self.by_endpoint,
        )?;
        write_table(formatter, "API Calls by Minute", "Minute", &self.by_minute)?;
        write_table(formatter, "API Calls by Status", "Status", &self.by_status)
    }
}

fn write_table<K: Display>(
    formatter: &mut Formatter<'_>,
    title: &str,
    dimension: &str,
    entries: &[CountEntry<K>],
) -> core::fmt::Result {
    writeln!(formatter)?;
    writeln!(formatter, "{title}")?;
    writeln!(formatter, "{dimension: <20} | {: >12}", "Count")?;
    writeln!(formatter, "{:-<35}", "")?;
    for entry in entries {
        writeln!(
            formatter,
            "{: <20} | {: >12}",
            entry.key,
            entry.count.to_formatted_string(&Locale::en)
        )?;
    }
    Ok(())
}
