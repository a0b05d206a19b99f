//! Hierarchical expansion of schemes.
//!
//! A scheme body may reference other schemes by name. Flattening
//! resolves those references against the module and expands them
//! recursively until only primitive instructions remain — names that
//! match no scheme in the module. The result is a new scheme with the
//! same name and port lists whose body is entirely primitive.
//!
//! Expansion binds a referenced scheme's declared input/output ports
//! positionally onto the instruction's actual ports. Every other name
//! appearing in the referenced body is a local wire and is renamed to a
//! fresh identifier, consistently within that instantiation. Fresh names
//! avoid every identifier already present in the module, so flattened
//! output is itself valid source.

use std::collections::{HashMap, HashSet};

use crate::dsl::{Instruction, Module, Scheme};
use crate::error::{ElogicError, Result};

/// Flatten the named scheme to primitive instructions.
pub fn flatten(module: &Module, name: &str) -> Result<Scheme> {
    Flattener::new(module).run(name)
}

struct Flattener<'a> {
    /// Scheme name -> declaration; the first declaration wins
    index: HashMap<&'a str, &'a Scheme>,
    names: NameGenerator,
}

impl<'a> Flattener<'a> {
    fn new(module: &'a Module) -> Self {
        let mut index = HashMap::new();
        for scheme in &module.schemes {
            index.entry(scheme.name.as_str()).or_insert(scheme);
        }
        Self {
            index,
            names: NameGenerator::new(module),
        }
    }

    fn run(&mut self, name: &str) -> Result<Scheme> {
        let scheme = self
            .index
            .get(name)
            .copied()
            .ok_or_else(|| ElogicError::UndefinedScheme {
                name: name.to_string(),
            })?;

        // The requested scheme keeps its own port names; only internal
        // wires are renamed.
        let mut bindings: HashMap<String, String> = HashMap::new();
        for port in scheme.inputs.iter().chain(scheme.outputs.iter()) {
            bindings.insert(port.clone(), port.clone());
        }

        let mut body = Vec::new();
        let mut stack = vec![scheme.name.as_str()];
        self.expand_body(scheme, &mut bindings, &mut stack, &mut body)?;

        let mut flat = Scheme::new(
            scheme.name.clone(),
            scheme.inputs.clone(),
            scheme.outputs.clone(),
        );
        flat.body = body;
        Ok(flat)
    }

    fn expand_body(
        &mut self,
        scheme: &'a Scheme,
        bindings: &mut HashMap<String, String>,
        stack: &mut Vec<&'a str>,
        out: &mut Vec<Instruction>,
    ) -> Result<()> {
        for instr in &scheme.body {
            let inputs = self.resolve(&instr.inputs, bindings);
            let outputs = self.resolve(&instr.outputs, bindings);

            let target = match self.index.get(instr.name.as_str()).copied() {
                Some(target) => target,
                None => {
                    // A primitive operation passes through unchanged.
                    out.push(Instruction::new(instr.name.clone(), inputs, outputs));
                    continue;
                }
            };

            check_port_count(scheme, instr, "input", target.inputs.len(), inputs.len())?;
            check_port_count(scheme, instr, "output", target.outputs.len(), outputs.len())?;

            if stack.contains(&target.name.as_str()) {
                return Err(ElogicError::RecursiveScheme {
                    name: target.name.clone(),
                });
            }

            tracing::debug!(scheme = %target.name, "expanding scheme reference");

            let mut inner: HashMap<String, String> =
                target.inputs.iter().cloned().zip(inputs).collect();
            inner.extend(target.outputs.iter().cloned().zip(outputs));

            stack.push(target.name.as_str());
            self.expand_body(target, &mut inner, stack, out)?;
            stack.pop();
        }

        Ok(())
    }

    /// Map an instruction's port names through the instantiation's
    /// bindings, allocating a fresh wire name for each local on first
    /// sight.
    fn resolve(&mut self, ports: &[String], bindings: &mut HashMap<String, String>) -> Vec<String> {
        ports
            .iter()
            .map(|port| {
                bindings
                    .entry(port.clone())
                    .or_insert_with(|| self.names.fresh())
                    .clone()
            })
            .collect()
    }
}

fn check_port_count(
    scheme: &Scheme,
    instr: &Instruction,
    direction: &'static str,
    expected: usize,
    found: usize,
) -> Result<()> {
    if expected != found {
        return Err(ElogicError::PortCountMismatch {
            scheme: scheme.name.clone(),
            target: instr.name.clone(),
            direction,
            expected,
            found,
        });
    }
    Ok(())
}

/// Generates wire names `w0`, `w1`, ... skipping any identifier that
/// already occurs in the module.
struct NameGenerator {
    used: HashSet<String>,
    counter: usize,
}

impl NameGenerator {
    fn new(module: &Module) -> Self {
        let mut used = HashSet::new();
        for scheme in &module.schemes {
            used.insert(scheme.name.clone());
            used.extend(scheme.inputs.iter().cloned());
            used.extend(scheme.outputs.iter().cloned());
            for instr in &scheme.body {
                used.insert(instr.name.clone());
                used.extend(instr.inputs.iter().cloned());
                used.extend(instr.outputs.iter().cloned());
            }
        }
        Self { used, counter: 0 }
    }

    fn fresh(&mut self) -> String {
        loop {
            let name = format!("w{}", self.counter);
            self.counter += 1;
            if self.used.insert(name.clone()) {
                return name;
            }
        }
    }
}
