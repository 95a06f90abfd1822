//! Driver mock unit tests

use super::mock::{MockDriver, MockElement, MockFailure};
use super::traits::{Driver, ElementHandle, Locator};
use crate::Error;

#[tokio::test]
async fn test_mock_element_becomes_displayed() {
    let element = MockElement::new("div", Some("Test text")).displayed_after(2);

    assert!(!element.is_displayed().await.unwrap());
    assert!(!element.is_displayed().await.unwrap());
    assert!(element.is_displayed().await.unwrap());
    assert_eq!(element.displayed_checks(), 3);

    let text = element.text().await.unwrap();
    assert_eq!(text, "Test text");
}

#[tokio::test]
async fn test_mock_element_stale_clicks() {
    let element = MockElement::new("button", Some("Submit")).stale_for(1);

    assert!(matches!(
        element.click().await,
        Err(Error::StaleElement(_))
    ));
    element.click().await.unwrap();
    assert_eq!(element.click_attempts(), 2);
}

#[tokio::test]
async fn test_mock_element_state_failure() {
    let element = MockElement::new("div", None).failing_state(MockFailure::Driver);

    assert!(matches!(
        element.is_displayed().await,
        Err(Error::Driver(_))
    ));
    assert!(matches!(element.is_enabled().await, Err(Error::Driver(_))));
}

#[tokio::test]
async fn test_mock_element_records_input() {
    let element = MockElement::new("input", None);
    assert_eq!(element.tag_name(), "input");

    element.clear().await.unwrap();
    element.type_text("hello").await.unwrap();
    element.hover().await.unwrap();

    assert_eq!(element.clear_count(), 1);
    assert_eq!(element.typed().await, vec!["hello".to_string()]);
    assert_eq!(element.hover_count(), 1);
}

#[tokio::test]
async fn test_mock_driver_locator_sequence() {
    let driver = MockDriver::new();
    let spinner = Locator::css(".spinner");
    driver.set_matches(spinner.clone(), vec![2, 1, 0]).await;

    assert_eq!(driver.find_elements(&spinner).await.unwrap().len(), 2);
    assert_eq!(driver.find_elements(&spinner).await.unwrap().len(), 1);
    assert_eq!(driver.find_elements(&spinner).await.unwrap().len(), 0);
    // last entry repeats
    assert_eq!(driver.find_elements(&spinner).await.unwrap().len(), 0);
    assert_eq!(driver.find_calls(), 4);
}

#[tokio::test]
async fn test_mock_driver_unknown_locator_matches_nothing() {
    let driver = MockDriver::new();
    let matches = driver
        .find_elements(&Locator::xpath("//div[@id='missing']"))
        .await
        .unwrap();
    assert!(matches.is_empty());
}

#[tokio::test]
async fn test_mock_driver_window_switching() {
    let driver = MockDriver::new();
    driver.set_windows(vec!["first", "second"]).await;

    driver
        .switch_to_window(&"second".to_string())
        .await
        .unwrap();
    assert_eq!(driver.current_window().await, Some("second".to_string()));

    let result = driver.switch_to_window(&"missing".to_string()).await;
    assert!(matches!(result, Err(Error::WindowNotFound(_))));
}

#[tokio::test]
async fn test_mock_driver_records_navigation_and_scripts() {
    let driver = MockDriver::new();

    driver.navigate("https://example.com").await.unwrap();
    driver.refresh().await.unwrap();
    driver
        .execute_script("return 1", vec![])
        .await
        .unwrap();

    assert_eq!(
        driver.navigations().await,
        vec!["https://example.com".to_string()]
    );
    assert_eq!(driver.refresh_count(), 1);
    assert_eq!(driver.scripts().await.len(), 1);
}
