//! Per-frame input polling.
//!
//! [`InputPoller`] owns the descriptor table (one joypad descriptor, one
//! analog descriptor) and, once per frame, sweeps every declared
//! `(port, index, id)` combination against the host's input-state query.
//! Slots whose value changed are overwritten in the snapshot and reported to
//! the change sink, in sweep order (port-major, then index, then id).

use crate::descriptor::{Descriptor, DescriptorError};
use crate::event::{ChangeSink, InputChange};
use crate::host::Host;

pub struct InputPoller {
    joypad: Descriptor,
    analog: Descriptor,
}

impl InputPoller {
    pub fn new() -> Result<Self, DescriptorError> {
        Ok(Self {
            joypad: Descriptor::joypad()?,
            analog: Descriptor::analog()?,
        })
    }

    /// Polls the host and folds the current readings into the snapshots.
    ///
    /// Re-polling unchanged host state writes nothing and emits nothing.
    pub fn poll(&mut self, host: &mut dyn Host, mut sink: Option<&mut (dyn ChangeSink + 'static)>) {
        host.poll_input();

        for desc in [&mut self.joypad, &mut self.analog] {
            let device = desc.kind().device();
            for port in desc.ports() {
                for index in desc.indices() {
                    for id in desc.ids() {
                        let state = host.input_state(port, device, index, id) as u16;

                        // The sweep only visits declared triples, so the
                        // range check cannot miss.
                        let Some(old) = desc.value(port, index, id) else {
                            continue;
                        };
                        if state == old {
                            continue;
                        }
                        desc.set_value(port, index, id, state);

                        #[cfg(feature = "debug-log")]
                        log::trace!(
                            "slot changed: port={port} index={index} id={id} {old} -> {state}"
                        );

                        if let Some(sink) = sink.as_deref_mut() {
                            sink.on_change(&InputChange {
                                port,
                                kind: desc.kind(),
                                index,
                                id,
                                state,
                            });
                        }
                    }
                }
            }
        }
    }

    /// Folds the port-0 joypad snapshot into a bitmask: bit `i` is set iff
    /// button id `i` currently reads nonzero.
    pub fn joypad_mask(&self) -> u32 {
        let mut mask = 0;
        for id in self.joypad.ids() {
            if self.joypad.value(0, 0, id).unwrap_or(0) != 0 {
                mask |= 1 << id;
            }
        }
        mask
    }

    pub fn joypad(&self) -> &Descriptor {
        &self.joypad
    }

    pub fn analog(&self) -> &Descriptor {
        &self.analog
    }
}
