use super::*;

#[test]
fn missing_element_names_the_selector() {
    let err = BindError::missing(".hamburger");
    assert_eq!(err.to_string(), "required element not found: .hamburger");
}

#[test]
fn wrong_element_names_expected_interface() {
    let err = BindError::WrongElement { selector: "#certificateFrame".to_owned(), expected: "HtmlIFrameElement" };
    assert_eq!(err.to_string(), "element #certificateFrame is not a HtmlIFrameElement");
}

#[test]
fn environment_errors_have_stable_messages() {
    assert_eq!(BindError::NoWindow.to_string(), "no global window available");
    assert_eq!(BindError::NoDocument.to_string(), "window has no document");
    assert_eq!(BindError::NoBody.to_string(), "document has no body");
}
