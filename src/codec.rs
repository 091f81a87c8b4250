//! Line codec for subscription records.
//!
//! One record per line: `id,customer_id,asin,frequency` with a trailing
//! newline. There is no quoting or escaping; field values must not
//! contain the comma delimiter.

use crate::error::{Result, SubscriptionError};
use crate::types::{Asin, CustomerId, Subscription, SubscriptionId};

/// Field delimiter.
const DELIMITER: char = ',';

/// Number of fields in a record.
const FIELD_COUNT: usize = 4;

/// Encode a subscription as a single record line.
///
/// Values are written as-is; a field containing a comma produces a line
/// that will not decode back to the same subscription.
pub fn encode(subscription: &Subscription) -> String {
    format!(
        "{}{d}{}{d}{}{d}{}\n",
        subscription.id,
        subscription.customer_id,
        subscription.asin,
        subscription.frequency,
        d = DELIMITER,
    )
}

/// Decode a single record line.
///
/// Whitespace around fields is trimmed. Fields map positionally to
/// id, customer_id, asin, frequency.
pub fn decode(line: &str) -> Result<Subscription> {
    let fields: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();

    if fields.len() != FIELD_COUNT {
        return Err(SubscriptionError::InvalidRecord(format!(
            "expected {} fields, got {}: {:?}",
            FIELD_COUNT,
            fields.len(),
            line
        )));
    }

    let frequency = fields[3].parse::<u32>().map_err(|_| {
        SubscriptionError::InvalidRecord(format!("non-numeric frequency: {:?}", fields[3]))
    })?;

    Ok(Subscription {
        id: SubscriptionId::new(fields[0]),
        customer_id: CustomerId::new(fields[1]),
        asin: Asin::new(fields[2]),
        frequency,
    })
}
