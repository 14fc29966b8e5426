use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use bzip2::read::MultiBzDecoder;
use bzip2::write::BzEncoder;
use bzip2::Compression;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tvh_core::errors::{ErrorInfo, TvhError};

use crate::hypergraph::TimeVaryingHypergraph;
use crate::network::CommunicationNetwork;

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const WRITE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Reads a network document, bzip2-decoding it when the name ends in `.bz2`.
pub fn network_from_path(path: impl AsRef<Path>) -> Result<CommunicationNetwork, TvhError> {
    let path = path.as_ref();
    let json = read_document(path).map_err(|err| io_error("read-network", path, err))?;
    let network = network_from_json(&json)?;
    tracing::info!(
        path = %path.display(),
        channels = network.hyperedge_count(),
        participants = network.vertex_count(),
        "loaded communication network"
    );
    Ok(network)
}

/// Writes a network document, bzip2-encoding it when the name ends in `.bz2`.
pub fn write_network(
    path: impl AsRef<Path>,
    network: &CommunicationNetwork,
) -> Result<(), TvhError> {
    let path = path.as_ref();
    let json = network_to_json(network)?;
    write_document(path, json.as_bytes()).map_err(|err| io_error("write-network", path, err))?;
    tracing::info!(
        path = %path.display(),
        channels = network.hyperedge_count(),
        "wrote communication network"
    );
    Ok(())
}

/// Parses a network from its JSON document.
///
/// Each top-level key is a channel id mapping to an object with a
/// `participants` list and an ISO-8601 `end` timestamp.
pub fn network_from_json(json: &str) -> Result<CommunicationNetwork, TvhError> {
    let document: BTreeMap<String, ChannelRecord> = serde_json::from_str(json)
        .map_err(|err| TvhError::Decode(ErrorInfo::new("deserialize-json", err.to_string())))?;
    let mut records = Vec::with_capacity(document.len());
    for (channel, record) in document {
        let end = parse_timestamp(&record.end)
            .map_err(|err| with_channel(err, &channel))?;
        records.push((channel, record.participants, end));
    }
    Ok(CommunicationNetwork::from_hypergraph(
        TimeVaryingHypergraph::from_records(records)?,
    ))
}

/// Serializes a network to its JSON document.
pub fn network_to_json(network: &CommunicationNetwork) -> Result<String, TvhError> {
    let mut document = BTreeMap::new();
    for (channel, end) in network.timings() {
        let participants = network
            .participants_of(channel)?
            .cloned()
            .collect::<Vec<_>>();
        document.insert(
            channel.clone(),
            ChannelRecord {
                participants,
                end: end.format(WRITE_FORMAT).to_string(),
            },
        );
    }
    serde_json::to_string_pretty(&document)
        .map_err(|err| TvhError::Decode(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Parses an ISO-8601 timestamp.
///
/// Accepts a bare date (midnight), a date and time separated by `T` or a
/// space, and RFC 3339 timestamps whose offset is normalized to UTC.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, TvhError> {
    let value = value.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.naive_utc());
    }
    for format in TIMESTAMP_FORMATS {
        if let Ok(instant) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(instant);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| {
            TvhError::Decode(
                ErrorInfo::new("invalid-timestamp", "cannot parse timestamp")
                    .with_context("value", value)
                    .with_hint("use ISO-8601, e.g. 2023-05-27 or 2023-05-27T13:45:00"),
            )
        })
}

#[derive(Debug, Serialize, Deserialize)]
struct ChannelRecord {
    participants: Vec<String>,
    end: String,
}

fn read_document(path: &Path) -> io::Result<String> {
    let reader = BufReader::new(File::open(path)?);
    let mut json = String::new();
    if is_compressed(path) {
        MultiBzDecoder::new(reader).read_to_string(&mut json)?;
    } else {
        let mut reader = reader;
        reader.read_to_string(&mut json)?;
    }
    Ok(json)
}

fn write_document(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    if is_compressed(path) {
        let mut encoder = BzEncoder::new(writer, Compression::default());
        encoder.write_all(bytes)?;
        encoder.finish()?.flush()
    } else {
        let mut writer = writer;
        writer.write_all(bytes)?;
        writer.flush()
    }
}

fn is_compressed(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "bz2")
}

fn io_error(code: &str, path: &Path, err: io::Error) -> TvhError {
    TvhError::Io(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
    )
}

fn with_channel(err: TvhError, channel: &str) -> TvhError {
    match err {
        TvhError::Decode(info) => TvhError::Decode(info.with_context("channel", channel)),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_supported_timestamp_shapes() {
        let midnight = parse_timestamp("2023-05-27").unwrap();
        assert_eq!(midnight.to_string(), "2023-05-27 00:00:00");
        let full = parse_timestamp("2023-05-27T13:45:10.250").unwrap();
        assert_eq!(full.format(WRITE_FORMAT).to_string(), "2023-05-27T13:45:10.250");
        let spaced = parse_timestamp("2023-05-27 13:45").unwrap();
        assert_eq!(spaced.to_string(), "2023-05-27 13:45:00");
        let offset = parse_timestamp("2023-05-27T13:45:00+02:00").unwrap();
        assert_eq!(offset.to_string(), "2023-05-27 11:45:00");
    }

    #[test]
    fn rejects_garbage_timestamps() {
        let err = parse_timestamp("last tuesday").unwrap_err();
        assert_eq!(err.info().code, "invalid-timestamp");
    }

    #[test]
    fn write_format_omits_zero_fraction() {
        let instant = parse_timestamp("2023-05-28").unwrap();
        assert_eq!(instant.format(WRITE_FORMAT).to_string(), "2023-05-28T00:00:00");
    }
}
