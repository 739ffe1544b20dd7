use super::*;

#[test]
fn get_pods_in_namespace() {
    let query = Kubectl::new().get_pods("shop", None);
    assert_eq!(query.program(), "kubectl");
    assert_eq!(query.args(), ["get", "pods", "-n", "shop", "-o", "json"]);
    assert_eq!(query.to_string(), "kubectl get pods -n shop -o json");
}

#[test]
fn get_pods_with_selector() {
    let query = Kubectl::new().get_pods("shop", Some("app=web,tier in (a,b)"));
    assert_eq!(
        query.args(),
        [
            "get",
            "pods",
            "-n",
            "shop",
            "-o",
            "json",
            "-l",
            "app=web,tier in (a,b)"
        ]
    );
}

#[test]
fn empty_selector_is_ignored() {
    let query = Kubectl::new().get_pods("shop", Some(""));
    assert_eq!(query.args().len(), 6);
}

#[test]
fn get_pods_with_context() {
    let query = Kubectl::with_program("/opt/bin/kubectl")
        .context("staging".to_string())
        .get_pods("shop", Some("app=web"));
    assert_eq!(
        query.to_string(),
        "/opt/bin/kubectl get pods -n shop -o json -l app=web --context staging"
    );
}

#[test]
fn default_program() {
    assert_eq!(Kubectl::default(), Kubectl::new());
    assert_eq!(Kubectl::default().program(), "kubectl");
}

#[tokio::test]
async fn missing_program_fails_to_spawn() {
    let query = Kubectl::with_program("/nonexistent/pod-ready/kubectl").get_pods("shop", None);
    let err = query.output().await.unwrap_err();
    assert!(matches!(err, KubectlError::Spawn { .. }));
    assert_eq!(err.stderr(), None);
}

#[cfg(unix)]
#[tokio::test]
async fn output_is_captured_stdout() {
    let query = Kubectl::with_program("echo").get_pods("shop", Some("app=web"));
    let stdout = query.output().await.unwrap();
    assert_eq!(stdout, "get pods -n shop -o json -l app=web\n");
}

#[cfg(unix)]
#[tokio::test]
async fn non_zero_exit_is_failure() {
    let query = Kubectl::with_program("false").get_pods("shop", None);
    let err = query.output().await.unwrap_err();
    let KubectlError::Failed { status, .. } = &err else {
        panic!("expected failure, got {err:?}");
    };
    assert!(!status.success());
    assert_eq!(err.stderr(), Some(""));
}

#[cfg(unix)]
#[tokio::test]
async fn non_zero_exit_captures_stderr() {
    // `sh get ...` tries to open a script named "get" and complains on stderr
    let query = Kubectl::with_program("sh").get_pods("shop", None);
    let err = query.output().await.unwrap_err();
    assert!(err.stderr().is_some_and(|stderr| !stderr.is_empty()));
}
