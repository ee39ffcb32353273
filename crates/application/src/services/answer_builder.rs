use crate::ports::{RawAnswer, ResolverEngine};
use bytes::Bytes;
use ferrous_resolv_domain::{Answer, AnswerFlags, AnswerParts, ResolveError};
use tracing::debug;

/// Turns the engine's raw answer into an [`Answer`].
pub struct AnswerBuilder;

impl AnswerBuilder {
    /// Builds the answer for one resolve call.
    ///
    /// A nonzero `code` becomes [`ResolveError::Engine`] with the engine's
    /// own message and `raw` is not looked at.
    pub fn build(
        engine: &dyn ResolverEngine,
        raw: RawAnswer,
        code: i32,
    ) -> Result<Answer, ResolveError> {
        Self::engine_status(engine, code)?;

        let count = raw.entry_count();
        let raw_data = Self::decode_rdata(raw.data, &raw.len, count)?;

        if raw.havedata != !raw_data.is_empty() {
            return Err(ResolveError::MalformedAnswer(format!(
                "have-data flag is {} but the answer carries {} records",
                raw.havedata,
                raw_data.len()
            )));
        }

        if raw.bogus && raw.secure {
            return Err(ResolveError::MalformedAnswer(
                "answer is flagged both secure and bogus".to_string(),
            ));
        }

        let why_bogus = if raw.bogus { raw.why_bogus } else { None };

        debug!(
            qname = %raw.qname,
            qtype = raw.qtype,
            records = raw_data.len(),
            secure = raw.secure,
            bogus = raw.bogus,
            "Engine answer marshalled"
        );

        Ok(Answer::from(AnswerParts {
            qname: raw.qname,
            qtype: raw.qtype,
            qclass: raw.qclass,
            raw_data,
            canonical_name: raw.canonname.unwrap_or_default(),
            rcode: raw.rcode,
            answer_packet: raw.answer_packet,
            flags: AnswerFlags {
                have_data: raw.havedata,
                nx_domain: raw.nxdomain,
                secure: raw.secure,
                bogus: raw.bogus,
            },
            why_bogus,
        }))
    }

    /// Maps an engine return code: zero is success, anything else an error.
    pub fn engine_status<E>(engine: &E, code: i32) -> Result<(), ResolveError>
    where
        E: ResolverEngine + ?Sized,
    {
        if code == 0 {
            return Ok(());
        }
        Err(ResolveError::Engine {
            code,
            message: engine.error_string(code),
        })
    }

    /// Copies exactly `count` rdata entries out of the engine's tables.
    ///
    /// Entry `i` is the first `len[i]` octets of `data[i]`. Zero-length
    /// entries are kept. Any table shorter than `count`, or a length past
    /// the end of its buffer, is rejected.
    pub fn decode_rdata(
        data: Vec<Bytes>,
        len: &[usize],
        count: usize,
    ) -> Result<Vec<Bytes>, ResolveError> {
        if data.len() < count || len.len() < count {
            return Err(ResolveError::MalformedAnswer(format!(
                "expected {} rdata entries, got {} buffers and {} lengths",
                count,
                data.len(),
                len.len()
            )));
        }

        let mut rdata = Vec::with_capacity(count);
        for (index, (buffer, &length)) in data.into_iter().zip(len).take(count).enumerate() {
            if length > buffer.len() {
                return Err(ResolveError::MalformedAnswer(format!(
                    "rdata entry {} claims {} octets but holds {}",
                    index,
                    length,
                    buffer.len()
                )));
            }
            rdata.push(buffer.slice(..length));
        }

        Ok(rdata)
    }
}
