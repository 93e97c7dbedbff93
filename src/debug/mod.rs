// Debug query primitives
//
// The core never logs; what it offers instead are pure inspection
// surfaces a front-end can render: the disassembler here and the trace
// line generator on the CPU.

pub mod disassembler;

pub use disassembler::{disassemble_range, DisassembledInstruction};
