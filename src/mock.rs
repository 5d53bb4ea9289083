//! Register-file mock of an MPU-6050 for tests
//!
//! Writes set the register pointer from their first byte and store any
//! further bytes from there on; reads return consecutive registers from the
//! pointer. Every operation is logged, and individual phases can be made to
//! fail.

use core::cell::RefCell;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};
use std::{rc::Rc, vec::Vec};

/// Logged bus operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Write(u8, Vec<u8>),
    Read(u8, usize),
}

#[derive(Debug)]
struct State {
    registers: [u8; 256],
    pointer: u8,
    ops: Vec<Op>,
    fail_address_writes: bool,
    fail_writes_to: Option<u8>,
    fail_reads: bool,
}

/// Cloning shares state, so a test can keep a handle after giving one away.
#[derive(Debug, Clone)]
pub struct MockI2c {
    state: Rc<RefCell<State>>,
}

impl MockI2c {
    /// A blank register file.
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                registers: [0; 256],
                pointer: 0,
                ops: Vec::new(),
                fail_address_writes: false,
                fail_writes_to: None,
                fail_reads: false,
            })),
        }
    }

    /// A register file that identifies as an MPU-6050 and, like the real
    /// part, powers up asleep on the internal oscillator.
    pub fn mpu6050() -> Self {
        let mock = Self::new();
        mock.set_register(0x75, 0x68);
        mock.set_register(0x6B, 0x40);
        mock
    }

    pub fn register(&self, reg: u8) -> u8 {
        self.state.borrow().registers[usize::from(reg)]
    }

    pub fn set_register(&self, reg: u8, value: u8) {
        self.state.borrow_mut().registers[usize::from(reg)] = value;
    }

    pub fn set_registers(&self, start: u8, values: &[u8]) {
        let mut state = self.state.borrow_mut();
        for (i, value) in values.iter().enumerate() {
            state.registers[usize::from(start) + i] = *value;
        }
    }

    pub fn ops(&self) -> Vec<Op> {
        self.state.borrow().ops.clone()
    }

    pub fn clear_ops(&self) {
        self.state.borrow_mut().ops.clear();
    }

    /// Fail every single-byte (register address only) write.
    pub fn fail_address_writes(&self, fail: bool) {
        self.state.borrow_mut().fail_address_writes = fail;
    }

    /// Fail writes that carry a payload for `reg`.
    pub fn fail_writes_to(&self, reg: u8) {
        self.state.borrow_mut().fail_writes_to = Some(reg);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.state.borrow_mut().fail_reads = fail;
    }
}

impl ErrorType for MockI2c {
    type Error = ErrorKind;
}

impl I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        for operation in operations {
            match operation {
                Operation::Write(bytes) => {
                    state.ops.push(Op::Write(address, bytes.to_vec()));
                    if bytes.len() == 1 && state.fail_address_writes {
                        return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
                    }
                    if bytes.len() > 1 && state.fail_writes_to == Some(bytes[0]) {
                        return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data));
                    }
                    if let Some((reg, payload)) = bytes.split_first() {
                        state.pointer = *reg;
                        for value in payload {
                            let pointer = state.pointer;
                            state.registers[usize::from(pointer)] = *value;
                            state.pointer = pointer.wrapping_add(1);
                        }
                    }
                }
                Operation::Read(buf) => {
                    state.ops.push(Op::Read(address, buf.len()));
                    if state.fail_reads {
                        return Err(ErrorKind::Other);
                    }
                    for byte in buf.iter_mut() {
                        let pointer = state.pointer;
                        *byte = state.registers[usize::from(pointer)];
                        state.pointer = pointer.wrapping_add(1);
                    }
                }
            }
        }
        Ok(())
    }
}
