use std::fmt;
use std::io;
use std::process::ExitStatus;
use std::process::Stdio;

use tokio::process::Command;

const DEFAULT_PROGRAM: &str = "kubectl";

#[derive(Debug, thiserror::Error)]
pub enum KubectlError {
    #[error("failed to run {program}: {source}")]
    Spawn { program: String, source: io::Error },
    #[error("{program} exited with {status}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

impl KubectlError {
    /// Captured standard error of a query that ran but failed.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::Spawn { .. } => None,
            Self::Failed { stderr, .. } => Some(stderr),
        }
    }
}

/// Handle on the `kubectl` client used to list pods.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Kubectl {
    program: String,
    context: Option<String>,
}

impl Default for Kubectl {
    fn default() -> Self {
        Self::new()
    }
}

impl Kubectl {
    /// Use `kubectl` as found on `PATH`.
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    /// Use a specific client program, e.g. an absolute path or a wrapper.
    ///
    /// # Examples
    ///
    /// ```
    /// let kubectl = pod_ready_kubectl::Kubectl::with_program("/usr/local/bin/kubectl");
    /// assert_eq!(kubectl.program(), "/usr/local/bin/kubectl");
    /// ```
    pub fn with_program(program: impl ToString) -> Self {
        Self {
            program: program.to_string(),
            context: None,
        }
    }

    /// Run every query against the given kubeconfig context.
    pub fn context(self, context: impl Into<Option<String>>) -> Self {
        Self {
            context: context.into(),
            ..self
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Build `kubectl get pods -n <namespace> -o json [-l <selector>]`.
    ///
    /// The selector is passed through untouched. Arguments reach the
    /// process as a vector, so nothing in it is interpreted by a shell.
    ///
    /// # Examples
    ///
    /// ```
    /// let query = pod_ready_kubectl::Kubectl::new().get_pods("shop", Some("app=web"));
    /// assert_eq!(query.args(), ["get", "pods", "-n", "shop", "-o", "json", "-l", "app=web"]);
    /// ```
    pub fn get_pods(&self, namespace: &str, label_selector: Option<&str>) -> GetPods {
        let mut args = vec![
            "get".to_string(),
            "pods".to_string(),
            "-n".to_string(),
            namespace.to_string(),
            "-o".to_string(),
            "json".to_string(),
        ];
        if let Some(selector) = label_selector.filter(|selector| !selector.is_empty()) {
            args.push("-l".to_string());
            args.push(selector.to_string());
        }
        if let Some(context) = &self.context {
            args.push("--context".to_string());
            args.push(context.clone());
        }
        GetPods {
            program: self.program.clone(),
            args,
        }
    }
}

/// A fully built pod listing query, ready to run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GetPods {
    program: String,
    args: Vec<String>,
}

impl GetPods {
    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Run the query to completion and return its standard output.
    ///
    /// A non-zero exit yields [`KubectlError::Failed`] carrying the
    /// captured standard error. There is no retry and no timeout.
    pub async fn output(&self) -> Result<String, KubectlError> {
        tracing::debug!(command = %self, "Running pod query");
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| KubectlError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            tracing::error!(status = %output.status, stderr = stderr.trim_end(), "Pod query failed");
            return Err(KubectlError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        tracing::debug!(bytes = stdout.len(), "Pod query succeeded");
        Ok(stdout)
    }
}

impl fmt::Display for GetPods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
