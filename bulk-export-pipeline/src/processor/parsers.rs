//! Line parsers, one per exported record kind.

use bulk_export_shared::{uri_ending, FieldName, FieldValue, Triple};

use crate::errors::RecordError;

/// Data column of a token count line without any tokens.
const EMPTY_TOKEN_COUNTS: &str = "{}";

/// Split `line` on tabs into exactly `N` fields.
fn split_fields<const N: usize>(line: &str) -> Result<[&str; N], RecordError> {
    let fields: Vec<&str> = line.split('\t').collect();
    <[&str; N]>::try_from(fields).map_err(|fields| RecordError::FieldCount {
        expected: N,
        found: fields.len(),
    })
}

fn identifier(wiki_url: &str) -> Result<String, RecordError> {
    uri_ending(wiki_url)
        .map(str::to_owned)
        .ok_or_else(|| RecordError::MissingWikiMarker(wiki_url.to_owned()))
}

fn frequency(raw: &str) -> Result<i64, RecordError> {
    raw.trim()
        .parse()
        .map_err(|_| RecordError::InvalidFrequency(raw.to_owned()))
}

/// Split a `token,freq` pair on its last comma. Tokens may contain commas.
///
/// Negative frequencies repeat the token zero times.
fn token_frequency(pair: &str) -> Result<(&str, usize), RecordError> {
    let (token, freq) = pair
        .rsplit_once(',')
        .ok_or_else(|| RecordError::MissingFrequency(pair.to_owned()))?;
    let repeats = usize::try_from(frequency(freq)?).unwrap_or(0);
    Ok((token, repeats))
}

/// Expand token counts into a bag-of-words string.
///
/// Every token is written `freq` times, each occurrence followed by a
/// space, so `{(a,2),(b,1)}` becomes `"a a b "`.
fn context(data: &str) -> Result<String, RecordError> {
    if data == EMPTY_TOKEN_COUNTS {
        return Ok(String::new());
    }

    let pairs = data
        .strip_prefix("{(")
        .and_then(|rest| rest.strip_suffix(")}"))
        .ok_or_else(|| RecordError::MissingWrapper(data.to_owned()))?;

    let mut context = String::new();
    for pair in pairs.split("),(") {
        let (token, freq) = token_frequency(pair)?;
        for _ in 0..freq {
            context.push_str(token);
            context.push(' ');
        }
    }
    Ok(context)
}

/// Parse a `tokenCounts` line: `wikiUrl<TAB>{(token,freq),...}`.
pub fn parse_token_counts(line: &str) -> Result<Triple, RecordError> {
    let [wiki_url, data] = split_fields::<2>(line)?;
    let uri = identifier(wiki_url)?;
    let context = context(data)?;
    Ok(Triple::new(uri, FieldName::Context, FieldValue::string(&context)))
}

/// Parse a `pairCounts` line: `surfaceForm<TAB>wikiUrl<TAB>freq`.
///
/// The frequency is validated and then dropped.
pub fn parse_pair_counts(line: &str) -> Result<Triple, RecordError> {
    let [surface_form, wiki_url, freq] = split_fields::<3>(line)?;
    let uri = identifier(wiki_url)?;
    frequency(freq)?;
    Ok(Triple::new(
        uri,
        FieldName::SurfaceForm,
        FieldValue::string(surface_form),
    ))
}

/// Parse a `uriCounts` line: `wikiUrl<TAB>freq`.
///
/// The frequency is emitted exactly as written.
pub fn parse_uri_counts(line: &str) -> Result<Triple, RecordError> {
    let [wiki_url, freq] = split_fields::<2>(line)?;
    let uri = identifier(wiki_url)?;
    let count = FieldValue::raw_number(freq)
        .ok_or_else(|| RecordError::InvalidFrequency(freq.to_owned()))?;
    Ok(Triple::new(uri, FieldName::UriCount, count))
}
