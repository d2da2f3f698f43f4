use crate::{ListSnippetsQuery, Pagination};
use crate::api::snippets::list_snippets_query::{DEFAULT_LIMIT, MAX_LIMIT};

use cc_core::CoreError;

use googletest::prelude::*;
use uuid::Uuid;

fn query(page: Option<&str>, limit: Option<&str>) -> ListSnippetsQuery {
    ListSnippetsQuery {
        page: page.map(str::to_string),
        limit: limit.map(str::to_string),
        ..Default::default()
    }
}

#[test]
fn given_empty_query_when_converted_then_defaults_apply() {
    let viewer = Uuid::new_v4();

    let feed = ListSnippetsQuery::default()
        .into_feed_request(Some(viewer))
        .unwrap();

    assert_that!(feed.page, eq(1));
    assert_that!(feed.limit, eq(DEFAULT_LIMIT));
    assert_that!(feed.query.offset, eq(0));
    assert_that!(feed.query.limit, eq(DEFAULT_LIMIT));
    assert_that!(feed.query.viewer, some(eq(viewer)));
}

#[test]
fn given_page_and_limit_when_converted_then_offset_computed() {
    let feed = query(Some("3"), Some("25")).into_feed_request(None).unwrap();

    assert_that!(feed.page, eq(3));
    assert_that!(feed.query.limit, eq(25));
    assert_that!(feed.query.offset, eq(50));
}

#[test]
fn given_blank_filters_when_converted_then_ignored() {
    let params = ListSnippetsQuery {
        language: Some("  ".to_string()),
        tag: Some("".to_string()),
        search: Some(" sort ".to_string()),
        ..Default::default()
    };

    let feed = params.into_feed_request(None).unwrap();

    assert_that!(feed.query.language, none());
    assert_that!(feed.query.tag, none());
    assert_that!(feed.query.search, some(eq("sort")));
}

#[test]
fn given_out_of_range_values_when_converted_then_field_errors() {
    let too_big = (MAX_LIMIT + 1).to_string();

    let result = query(Some("0"), Some(&too_big)).into_feed_request(None);

    let Err(CoreError::Validation { errors, .. }) = result else {
        panic!("expected validation error");
    };
    let fields: Vec<String> = errors.into_inner().into_iter().map(|e| e.field).collect();
    assert_that!(fields, elements_are![eq("page"), eq("limit")]);
}

#[test]
fn given_non_numeric_page_when_converted_then_field_error() {
    let result = query(Some("two"), None).into_feed_request(None);

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_totals_when_paginating_then_total_pages_rounds_up() {
    assert_that!(Pagination::new(1, 20, 0).total_pages, eq(0));
    assert_that!(Pagination::new(1, 20, 20).total_pages, eq(1));
    assert_that!(Pagination::new(1, 20, 21).total_pages, eq(2));
    assert_that!(Pagination::new(2, 2, 5).total_pages, eq(3));
}
