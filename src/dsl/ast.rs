//! Abstract syntax tree for the scheme-description DSL.
//!
//! The tree is a plain value hierarchy owned strictly top-down: a
//! [`Module`] owns its [`Scheme`]s and a scheme owns its
//! [`Instruction`]s. Nothing holds a reference back to its parent and
//! nothing is mutated after parsing; every sequence preserves source
//! declaration order.

use std::fmt;

/// Complete AST of a parsed source file: an ordered collection of
/// schemes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    /// All schemes, in declaration order
    pub schemes: Vec<Scheme>,
}

impl Module {
    /// Create a new empty module.
    pub fn new() -> Self {
        Self {
            schemes: Vec::new(),
        }
    }
}

impl Default for Module {
    fn default() -> Self {
        Self::new()
    }
}

/// A named unit with declared input/output ports and an ordered body of
/// instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheme {
    /// Scheme name
    pub name: String,
    /// Input port names, in declaration order
    pub inputs: Vec<String>,
    /// Output port names, in declaration order
    pub outputs: Vec<String>,
    /// Body instructions, in source order
    pub body: Vec<Instruction>,
}

impl Scheme {
    /// Create a scheme with the given ports and an empty body.
    pub fn new(name: impl Into<String>, inputs: Vec<String>, outputs: Vec<String>) -> Self {
        Self {
            name: name.into(),
            inputs,
            outputs,
            body: Vec::new(),
        }
    }
}

/// One step inside a scheme body: a name (a primitive operation or a
/// reference to another scheme — the grammar does not distinguish) plus
/// ordered input/output port-name lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Operation or scheme name
    pub name: String,
    /// Input port names, in source order
    pub inputs: Vec<String>,
    /// Output port names, in source order
    pub outputs: Vec<String>,
}

impl Instruction {
    /// Create an instruction.
    pub fn new(name: impl Into<String>, inputs: Vec<String>, outputs: Vec<String>) -> Self {
        Self {
            name: name.into(),
            inputs,
            outputs,
        }
    }
}

// The Display impls below are the canonical serializer. Re-parsing their
// output reconstructs a structurally identical tree; comments are
// discarded at scan time and never reproduced.

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for scheme in &self.schemes {
            write!(f, "{}", scheme)?;
        }
        Ok(())
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "SCHEME {} {} -> {}",
            self.name,
            self.inputs.join(" "),
            self.outputs.join(" ")
        )?;
        for instr in &self.body {
            write!(f, "{}", instr)?;
        }
        writeln!(f, "END")?;
        writeln!(f)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  {} {} -> {}",
            self.name,
            self.inputs.join(" "),
            self.outputs.join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_serialize_scheme() {
        let mut scheme = Scheme::new("adder", strings(&["a", "b"]), strings(&["s", "c"]));
        scheme
            .body
            .push(Instruction::new("XOR", strings(&["a", "b"]), strings(&["s"])));
        scheme
            .body
            .push(Instruction::new("AND", strings(&["a", "b"]), strings(&["c"])));

        let module = Module {
            schemes: vec![scheme],
        };

        assert_eq!(
            module.to_string(),
            "SCHEME adder a b -> s c\n  XOR a b -> s\n  AND a b -> c\nEND\n\n"
        );
    }

    #[test]
    fn test_serialize_empty_module() {
        assert_eq!(Module::new().to_string(), "");
    }

    #[test]
    fn test_serialize_empty_ports() {
        let scheme = Scheme::new("s", Vec::new(), Vec::new());
        let module = Module {
            schemes: vec![scheme],
        };
        assert_eq!(module.to_string(), "SCHEME s  -> \nEND\n\n");
    }
}
