//! `<project><tracks><track id=".." duration="..">title</track></tracks></project>`

use std::str::FromStr;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::BoxedCause;
use crate::library::{Catalog, Track};

use super::{MalformedProject, decoded_track};

const ROOT: &str = "project";
const TRACKS: &str = "tracks";
const TRACK: &str = "track";

pub(super) fn encode(catalog: &Catalog) -> Result<String, BoxedCause> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new(ROOT)))?;
    writer.write_event(Event::Start(BytesStart::new(TRACKS)))?;

    for track in catalog.iter() {
        let id = track.id().to_string();
        let duration = track.duration().to_string();
        let start = BytesStart::new(TRACK)
            .with_attributes([("id", id.as_str()), ("duration", duration.as_str())]);

        writer.write_event(Event::Start(start))?;
        writer.write_event(Event::Text(BytesText::new(track.title())))?;
        writer.write_event(Event::End(BytesEnd::new(TRACK)))?;
    }

    writer.write_event(Event::End(BytesEnd::new(TRACKS)))?;
    writer.write_event(Event::End(BytesEnd::new(ROOT)))?;

    Ok(String::from_utf8(writer.into_inner())?)
}

/// A `<track>` whose start tag has been read but not its end tag yet.
struct PendingTrack {
    id: i64,
    duration: f64,
    title: String,
}

fn parse_number<T: FromStr>(attribute: &'static str, value: &str) -> Result<T, MalformedProject> {
    value
        .trim()
        .parse()
        .map_err(|_| MalformedProject::InvalidNumber {
            attribute,
            value: value.to_string(),
        })
}

/// Read `id` (required) and `duration` (defaults to 0) off a `<track>` tag.
fn pending_track(start: &BytesStart) -> Result<PendingTrack, BoxedCause> {
    let mut id = None;
    let mut duration = None;

    for attr in start.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?;
        match attr.key.as_ref() {
            b"id" => id = Some(parse_number::<i64>("id", &value)?),
            b"duration" => duration = Some(parse_number::<f64>("duration", &value)?),
            _ => {}
        }
    }

    let id = id.ok_or(MalformedProject::MissingAttribute { attribute: "id" })?;
    Ok(PendingTrack {
        id,
        duration: duration.unwrap_or(0.0),
        title: String::new(),
    })
}

fn element_name(start: &BytesStart) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

/// True when `path` is the chain of open elements directly holding tracks.
fn in_track_list(path: &[String]) -> bool {
    path.len() == 2 && path[0] == ROOT && path[1] == TRACKS
}

/// Accept `name` as the document root, once.
fn check_root(name: &str, saw_root: &mut bool) -> Result<(), MalformedProject> {
    if *saw_root {
        return Err(MalformedProject::MultipleRoots {
            found: name.to_string(),
        });
    }
    if name != ROOT {
        return Err(MalformedProject::UnexpectedElement {
            expected: ROOT,
            found: name.to_string(),
        });
    }
    *saw_root = true;
    Ok(())
}

pub(super) fn decode(content: &str) -> Result<Vec<Track>, BoxedCause> {
    let mut reader = Reader::from_str(content);
    let mut path: Vec<String> = Vec::new();
    let mut saw_root = false;
    let mut pending: Option<PendingTrack> = None;
    let mut tracks = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = element_name(&e);
                if path.is_empty() {
                    check_root(&name, &mut saw_root)?;
                } else if in_track_list(&path) && name == TRACK {
                    pending = Some(pending_track(&e)?);
                }
                path.push(name);
            }
            Event::Empty(e) => {
                let name = element_name(&e);
                if path.is_empty() {
                    check_root(&name, &mut saw_root)?;
                } else if in_track_list(&path) && name == TRACK {
                    let p = pending_track(&e)?;
                    tracks.push(decoded_track(p.id, p.title, p.duration)?);
                }
            }
            Event::Text(t) if path.len() == 3 => {
                if let Some(p) = pending.as_mut() {
                    p.title.push_str(&t.unescape()?);
                }
            }
            Event::CData(c) if path.len() == 3 => {
                if let Some(p) = pending.as_mut() {
                    p.title.push_str(std::str::from_utf8(&c)?);
                }
            }
            Event::End(_) => {
                path.pop();
                if path.len() == 2 {
                    if let Some(p) = pending.take() {
                        tracks.push(decoded_track(p.id, p.title, p.duration)?);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = path.pop() {
        return Err(MalformedProject::UnclosedElement { element: open }.into());
    }
    if !saw_root {
        return Err(MalformedProject::MissingRoot.into());
    }
    Ok(tracks)
}
