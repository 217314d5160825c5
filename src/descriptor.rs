//! Descriptor table and input snapshot store.
//!
//! A [`Descriptor`] declares which `(port, index, id)` range is polled for one
//! logical input device and owns the flat snapshot of last-observed state
//! values for every combination in that range. Slots are addressed through a
//! fixed lexicographic offset function (port-major, then index, then id), so
//! each valid triple maps to exactly one slot.
//!
//! Ranges are validated at construction and every lookup is bounds-checked;
//! an out-of-range triple yields `None` rather than touching a neighbouring
//! slot.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Logical device class a descriptor polls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceKind {
    /// Digital RetroPad buttons.
    Joypad,
    /// Analog stick axes.
    Analog,
}

impl DeviceKind {
    /// The libretro device constant passed to the host input-state query.
    pub fn device(self) -> u32 {
        match self {
            DeviceKind::Joypad => libretro_sys::DEVICE_JOYPAD,
            DeviceKind::Analog => libretro_sys::DEVICE_ANALOG,
        }
    }
}

/// Errors produced when a descriptor's declared ranges are unusable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DescriptorError {
    /// A range was declared with `min > max`.
    #[error("invalid {axis} range: min {min} > max {max}")]
    InvalidRange {
        axis: &'static str,
        min: u32,
        max: u32,
    },

    /// The cross product of the three ranges does not fit in memory.
    #[error("descriptor ranges span too many slots to allocate")]
    TooManySlots,
}

/// Addressable `(port, index, id)` range for one device, plus the snapshot
/// of last-known values for every slot in that range.
///
/// Snapshot values are raw 16-bit words as reported by the host: `0`/`1` for
/// digital buttons, bit-cast signed axis readings for analog sticks.
#[derive(Debug)]
pub struct Descriptor {
    kind: DeviceKind,
    port_min: u32,
    port_max: u32,
    index_min: u32,
    index_max: u32,
    id_min: u32,
    id_max: u32,
    values: Vec<u16>,
}

impl Descriptor {
    /// Builds a descriptor over the given inclusive ranges, with the snapshot
    /// zero-initialized.
    pub fn new(
        kind: DeviceKind,
        ports: RangeInclusive<u32>,
        indices: RangeInclusive<u32>,
        ids: RangeInclusive<u32>,
    ) -> Result<Self, DescriptorError> {
        let span = |axis, range: &RangeInclusive<u32>| {
            let (min, max) = (*range.start(), *range.end());
            if min > max {
                Err(DescriptorError::InvalidRange { axis, min, max })
            } else {
                Ok((max - min) as u64 + 1)
            }
        };

        let port_span = span("port", &ports)?;
        let index_span = span("index", &indices)?;
        let id_span = span("id", &ids)?;
        let slots = port_span
            .checked_mul(index_span)
            .and_then(|n| n.checked_mul(id_span))
            .and_then(|n| usize::try_from(n).ok())
            .ok_or(DescriptorError::TooManySlots)?;

        Ok(Self {
            kind,
            port_min: *ports.start(),
            port_max: *ports.end(),
            index_min: *indices.start(),
            index_max: *indices.end(),
            id_min: *ids.start(),
            id_max: *ids.end(),
            values: vec![0; slots],
        })
    }

    /// The digital joypad descriptor: port 0, index 0, ids B through R3.
    pub fn joypad() -> Result<Self, DescriptorError> {
        Self::new(
            DeviceKind::Joypad,
            0..=0,
            0..=0,
            libretro_sys::DEVICE_ID_JOYPAD_B..=libretro_sys::DEVICE_ID_JOYPAD_R3,
        )
    }

    /// The analog stick descriptor: port 0, left and right sticks, X and Y.
    pub fn analog() -> Result<Self, DescriptorError> {
        Self::new(
            DeviceKind::Analog,
            0..=0,
            libretro_sys::DEVICE_INDEX_ANALOG_LEFT..=libretro_sys::DEVICE_INDEX_ANALOG_RIGHT,
            libretro_sys::DEVICE_ID_ANALOG_X..=libretro_sys::DEVICE_ID_ANALOG_Y,
        )
    }

    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    pub fn ports(&self) -> RangeInclusive<u32> {
        self.port_min..=self.port_max
    }

    pub fn indices(&self) -> RangeInclusive<u32> {
        self.index_min..=self.index_max
    }

    pub fn ids(&self) -> RangeInclusive<u32> {
        self.id_min..=self.id_max
    }

    /// Number of snapshot slots (the cross product of the three ranges).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Flat snapshot contents, in offset order.
    pub fn values(&self) -> &[u16] {
        &self.values
    }

    /// Slot offset for a triple, or `None` if any coordinate is outside the
    /// declared ranges.
    ///
    /// Offsets are lexicographic with every coordinate normalized to its
    /// range minimum: `port' * indices * ids + index' * ids + id'`.
    pub fn offset(&self, port: u32, index: u32, id: u32) -> Option<usize> {
        if !self.ports().contains(&port)
            || !self.indices().contains(&index)
            || !self.ids().contains(&id)
        {
            return None;
        }

        let index_span = (self.index_max - self.index_min) as u64 + 1;
        let id_span = (self.id_max - self.id_min) as u64 + 1;
        let offset = (port - self.port_min) as u64 * index_span * id_span
            + (index - self.index_min) as u64 * id_span
            + (id - self.id_min) as u64;
        Some(offset as usize)
    }

    /// Last-known value for a slot, or `None` out of range.
    pub fn value(&self, port: u32, index: u32, id: u32) -> Option<u16> {
        self.offset(port, index, id).map(|i| self.values[i])
    }

    /// Overwrites a slot, returning the previous value, or `None` out of
    /// range (in which case nothing is written).
    pub fn set_value(&mut self, port: u32, index: u32, id: u32, state: u16) -> Option<u16> {
        let i = self.offset(port, index, id)?;
        Some(std::mem::replace(&mut self.values[i], state))
    }
}
