use ferrous_resolv_domain::{Answer, MxRecord, RecordType, ResolveError, SrvRecord, TlsaRecord};
use hickory_proto::op::Message;
use hickory_proto::rr::{RData, RecordType as WireRecordType};
use hickory_proto::serialize::binary::{BinDecoder, Restrict};
use std::net::IpAddr;

/// Projects an answer's raw rdata into typed records.
///
/// Every projection walks `raw_data` in answer order and fails on the
/// first entry that does not decode as the expected type.
pub struct RecordProjector;

impl RecordProjector {
    /// Decodes one rdata buffer with the record codec.
    pub fn decode(record_type: RecordType, rdata: &[u8]) -> Result<RData, ResolveError> {
        let length = u16::try_from(rdata.len()).map_err(|_| {
            ResolveError::invalid_rdata(record_type, "rdata exceeds 65535 octets")
        })?;
        let mut decoder = BinDecoder::new(rdata);
        RData::read(
            &mut decoder,
            WireRecordType::from(record_type.to_u16()),
            Restrict::new(length),
        )
        .map_err(|e| ResolveError::invalid_rdata(record_type, e))
    }

    fn project<T>(
        answer: &Answer,
        record_type: RecordType,
        mut extract: impl FnMut(RData) -> Option<T>,
    ) -> Result<Vec<T>, ResolveError> {
        answer
            .raw_data()
            .iter()
            .map(|rdata| {
                let data = Self::decode(record_type, rdata)?;
                extract(data).ok_or_else(|| {
                    ResolveError::invalid_rdata(record_type, "unexpected record data type")
                })
            })
            .collect()
    }

    /// Addresses from an A or AAAA answer.
    pub fn addresses(answer: &Answer) -> Result<Vec<IpAddr>, ResolveError> {
        match answer.record_type() {
            Some(RecordType::A) => Self::project(answer, RecordType::A, |data| match data {
                RData::A(a) => Some(IpAddr::V4(a.0)),
                _ => None,
            }),
            Some(RecordType::AAAA) => {
                Self::project(answer, RecordType::AAAA, |data| match data {
                    RData::AAAA(aaaa) => Some(IpAddr::V6(aaaa.0)),
                    _ => None,
                })
            }
            _ => Err(ResolveError::invalid_rdata(
                answer.qtype(),
                "not an address answer",
            )),
        }
    }

    pub fn ptr_names(answer: &Answer) -> Result<Vec<String>, ResolveError> {
        Self::project(answer, RecordType::PTR, |data| match data {
            RData::PTR(ptr) => Some(ptr.to_utf8()),
            _ => None,
        })
    }

    /// MX records in answer order; sorting is the caller's business.
    pub fn mx_records(answer: &Answer) -> Result<Vec<MxRecord>, ResolveError> {
        Self::project(answer, RecordType::MX, |data| match data {
            RData::MX(mx) => Some(MxRecord::new(mx.preference, mx.exchange.to_utf8())),
            _ => None,
        })
    }

    pub fn srv_records(answer: &Answer) -> Result<Vec<SrvRecord>, ResolveError> {
        Self::project(answer, RecordType::SRV, |data| match data {
            RData::SRV(srv) => Some(SrvRecord::new(
                srv.priority,
                srv.weight,
                srv.port,
                srv.target.to_utf8(),
            )),
            _ => None,
        })
    }

    /// All character strings of all TXT records, flattened in order.
    ///
    /// Segments are converted lossily: octets that are not valid UTF-8
    /// come out as U+FFFD.
    pub fn txt_strings(answer: &Answer) -> Result<Vec<String>, ResolveError> {
        let per_record = Self::project(answer, RecordType::TXT, |data| match data {
            RData::TXT(txt) => Some(
                txt.txt_data
                    .iter()
                    .map(|segment| String::from_utf8_lossy(segment).into_owned())
                    .collect::<Vec<_>>(),
            ),
            _ => None,
        })?;
        Ok(per_record.into_iter().flatten().collect())
    }

    pub fn tlsa_records(answer: &Answer) -> Result<Vec<TlsaRecord>, ResolveError> {
        Self::project(answer, RecordType::TLSA, |data| match data {
            RData::TLSA(tlsa) => Some(TlsaRecord::new(
                u8::from(tlsa.cert_usage),
                u8::from(tlsa.selector),
                u8::from(tlsa.matching),
                tlsa.cert_data,
            )),
            _ => None,
        })
    }

    /// Parses the opaque answer packet into a full DNS message.
    pub fn answer_message(answer: &Answer) -> Result<Message, ResolveError> {
        Message::from_vec(answer.answer_packet())
            .map_err(|e| ResolveError::MalformedAnswer(format!("answer packet: {}", e)))
    }
}
