use chrono::{DateTime, Local};
use serde::{self, Deserialize, Deserializer, Serializer};
use serde::de::Error;

/// Serializer for serde with to serialize a chrono `DateTime<Local>` into an RFC 3339 string
/// This function is not used directly but rather from struct fields with a serde with attribute
/// pointing to this module
///
/// # Arguments
///
/// * 'date' - the date time object
/// * 'serializer' - serializer given from serde
pub fn serialize<S>(
    date: &DateTime<Local>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339())
}

pub fn deserialize<'de, D>(d: D) -> Result<DateTime<Local>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(d)?;

    Ok(DateTime::parse_from_rfc3339(&text)
        .map_err(D::Error::custom)?
        .with_timezone(&Local))
}
