//! Isolate and context wrapper around the `v8` crate.

use super::platform;
use crate::errors::{Result, ScriptHostError};

/// A script compiled in a [`ScriptEngine`] context, ready to run.
pub struct CompiledScript {
    name: String,
    script: v8::Global<v8::Script>,
}

impl CompiledScript {
    /// The name the script was compiled under, usually its file name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One V8 isolate with a single long-lived execution context.
///
/// All scripts compiled and run through the same engine share that context,
/// so globals set by one script are visible to the next.
pub struct ScriptEngine {
    // the context handle must be dropped before the isolate it points into
    context: v8::Global<v8::Context>,
    isolate: v8::OwnedIsolate,
}

impl ScriptEngine {
    /// Create an isolate and its execution context.
    ///
    /// Initializes the process-global platform on first use.
    pub fn new() -> Self {
        platform::init(None);

        let mut isolate = v8::Isolate::new(Default::default());
        let context = {
            let scope = &mut v8::HandleScope::new(&mut isolate);
            let context = v8::Context::new(scope, Default::default());
            v8::Global::new(scope, context)
        };

        ScriptEngine { context, isolate }
    }

    /// Compile `source` in the engine context.
    ///
    /// On failure the returned diagnostic carries the engine's exception
    /// text and the offending source line.
    pub fn compile(&mut self, name: &str, source: &str) -> Result<CompiledScript> {
        let scope = &mut v8::HandleScope::with_context(&mut self.isolate, &self.context);
        let scope = &mut v8::TryCatch::new(scope);

        let source = v8::String::new(scope, source).ok_or_else(|| {
            ScriptHostError::engine(format!("{}: source exceeds the engine string limit", name))
        })?;

        match v8::Script::compile(scope, source, None) {
            Some(script) => {
                let script = v8::Global::new(scope, script);
                Ok(CompiledScript {
                    name: name.to_string(),
                    script,
                })
            }
            None => Err(ScriptHostError::script_compile(format!(
                "{}: {}",
                name,
                exception_message(scope)
            ))),
        }
    }

    /// Run a previously compiled script.
    ///
    /// Returns the stringified completion value of the script.
    pub fn run(&mut self, compiled: &CompiledScript) -> Result<String> {
        let scope = &mut v8::HandleScope::with_context(&mut self.isolate, &self.context);
        let scope = &mut v8::TryCatch::new(scope);

        let script = v8::Local::new(scope, &compiled.script);
        match script.run(scope) {
            Some(value) => Ok(value.to_rust_string_lossy(scope)),
            None => Err(ScriptHostError::script_execute(format!(
                "{}: {}",
                compiled.name,
                exception_message(scope)
            ))),
        }
    }

    /// Compile and run in one step.
    pub fn eval(&mut self, name: &str, source: &str) -> Result<String> {
        let compiled = self.compile(name, source)?;
        self.run(&compiled)
    }
}

impl Default for ScriptEngine {
    fn default() -> Self {
        ScriptEngine::new()
    }
}

/// Render the pending exception of a `TryCatch` scope, with the source line
/// when the engine provides one.
fn exception_message(scope: &mut v8::TryCatch<v8::HandleScope>) -> String {
    let Some(exception) = scope.exception() else {
        return "unknown engine error".to_string();
    };
    let text = exception.to_rust_string_lossy(scope);
    match scope.message() {
        Some(message) => match message.get_line_number(scope) {
            Some(line) => format!("{} (line {})", text, line),
            None => text,
        },
        None => text,
    }
}
