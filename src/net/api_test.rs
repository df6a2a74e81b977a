use super::*;

#[test]
fn bearer_header_format() {
    assert_eq!(bearer("abc123"), "Bearer abc123");
}

#[test]
fn task_endpoints_embed_ids() {
    assert_eq!(task_endpoint("t1"), "/api/tasks/t1");
    assert_eq!(task_status_endpoint("t1"), "/api/tasks/t1/status");
    assert_eq!(task_image_endpoint("t1", "i9"), "/api/tasks/t1/images/i9");
    assert_eq!(task_file_endpoint("t1", "f4"), "/api/tasks/t1/files/f4");
}
