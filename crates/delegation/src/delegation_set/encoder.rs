use ndn_buffers::{Encoder, EncodingBuffer, EncodingEstimator};
use ndn_tlv::constants::{LINK_DELEGATION, LINK_PREFERENCE};
use ndn_tlv::{prepend_non_negative_integer_block, prepend_var_number, Block};
use tracing::debug;

use super::{is_valid_tlv_type, DelegationSet};
use crate::{Error, FormatError, UsageError};

impl DelegationSet {
    /// Prepends the list as a `typ` element and returns its size in bytes.
    ///
    /// `typ` must be [`CONTENT`](ndn_tlv::constants::CONTENT) (inside a Link
    /// object) or [`FORWARDING_HINT`](ndn_tlv::constants::FORWARDING_HINT);
    /// anything else is a [`UsageError`]. An empty list cannot be encoded.
    ///
    /// ```text
    /// DelegationList ::= typ TLV-LENGTH Delegation+
    /// Delegation     ::= LINK-DELEGATION-TYPE TLV-LENGTH Preference Name
    /// Preference     ::= LINK-PREFERENCE-TYPE TLV-LENGTH nonNegativeInteger
    /// ```
    pub fn wire_encode<E: Encoder + ?Sized>(
        &self,
        encoder: &mut E,
        typ: u32,
    ) -> Result<usize, Error> {
        if !is_valid_tlv_type(typ) {
            return Err(UsageError::InvalidTlvType(typ).into());
        }
        if self.dels.is_empty() {
            return Err(FormatError::EmptyList.into());
        }

        // The encoder grows towards the front, so walk the list backwards.
        let mut total_len = 0;
        for del in self.dels.iter().rev() {
            let mut del_len = del.name().wire_encode(encoder);
            del_len += prepend_non_negative_integer_block(encoder, LINK_PREFERENCE, del.preference());
            del_len += prepend_var_number(encoder, del_len as u64);
            del_len += prepend_var_number(encoder, LINK_DELEGATION as u64);
            total_len += del_len;
        }
        total_len += prepend_var_number(encoder, total_len as u64);
        total_len += prepend_var_number(encoder, typ as u64);
        debug!(typ, count = self.dels.len(), bytes = total_len, "encoded delegation list");
        Ok(total_len)
    }

    /// Encodes into a buffer sized by a first, estimating pass.
    pub fn to_wire(&self, typ: u32) -> Result<Vec<u8>, Error> {
        let mut estimator = EncodingEstimator::new();
        let size = self.wire_encode(&mut estimator, typ)?;
        let mut buf = EncodingBuffer::with_capacity(size);
        self.wire_encode(&mut buf, typ)?;
        Ok(buf.into_vec())
    }

    pub fn to_block(&self, typ: u32) -> Result<Block, Error> {
        let wire = self.to_wire(typ)?;
        Block::decode(&wire).map_err(|e| FormatError::Malformed(e).into())
    }
}
