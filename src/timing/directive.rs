use super::error::DirectiveError;
use super::model::TrackRequest;
use super::time::parse_time;

/// Consume the first field if `parse` accepts it, otherwise leave `fields`
/// untouched.
///
/// This is the only lookahead the directive grammar needs: the second field is
/// an end time when it parses as one, and the song name otherwise.
fn take_if<'s, T>(fields: &mut &'s [&str], parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    let current = *fields;
    let (first, rest) = current.split_first()?;
    let value = parse(*first)?;
    *fields = rest;
    Some(value)
}

/// Parse one directive line: `start[|end]|song[|artist]`.
///
/// The returned track has `end == None` when the line omitted it; the
/// segmentation pass fills it in later.
pub fn parse_line(line: &str) -> Result<TrackRequest, DirectiveError> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() < 2 {
        return Err(DirectiveError::MissingFields);
    }

    let mut rest: &[&str] = &fields;
    let start = take_if(&mut rest, parse_time).ok_or(DirectiveError::InvalidStartTime)?;
    let end = take_if(&mut rest, parse_time);

    let song_name = match rest.first() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => return Err(DirectiveError::MissingSongName),
    };
    let artist = rest
        .get(1)
        .filter(|a| !a.is_empty())
        .map(|a| a.to_string());

    Ok(TrackRequest {
        start,
        end,
        song_name,
        artist,
    })
}
