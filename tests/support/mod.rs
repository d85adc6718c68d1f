//! Scripted collaborators and fixtures for screener tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use daybook::app::ScreenerSettings;
use daybook::domain::{
    BookUpdateEvent, MetricMode, RawLevel, ResolvedMarket, Thresholds, TokenId, WatchedInstrument,
};
use daybook::error::{Error, Result};
use daybook::port::{BookStream, MarketResolver, ReferencePrices};

pub fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
}

pub fn settings(symbols: &[&str], mode: MetricMode) -> ScreenerSettings {
    ScreenerSettings {
        instruments: symbols.iter().map(|s| WatchedInstrument::new(*s)).collect(),
        mode,
        date: date(),
        thresholds: Thresholds::default(),
        timeout: None,
    }
}

pub fn levels(prices: &[&str]) -> Vec<RawLevel> {
    prices.iter().map(|p| RawLevel::new(*p, "100")).collect()
}

pub fn book(asset_id: &str, bids: &[&str], asks: &[&str]) -> BookUpdateEvent {
    BookUpdateEvent::book(asset_id, levels(bids), levels(asks))
}

/// Resolver answering from a fixed slug table.
#[derive(Debug, Default)]
pub struct ScriptedResolver {
    markets: HashMap<String, ResolvedMarket>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedResolver {
    /// Register `symbol`'s market for the fixture date with the given tokens.
    pub fn with_market(mut self, symbol: &str, tokens: &[&str]) -> Self {
        let slug = WatchedInstrument::new(symbol).market_slug(date());
        let market = ResolvedMarket::new(
            slug.clone(),
            tokens.iter().map(|t| TokenId::from(*t)).collect(),
        )
        .expect("market has tokens");
        self.markets.insert(slug, market);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("lock").clone()
    }
}

#[async_trait]
impl MarketResolver for ScriptedResolver {
    async fn resolve(&self, slug: &str) -> Result<ResolvedMarket> {
        self.calls.lock().expect("lock").push(slug.to_string());
        self.markets
            .get(slug)
            .cloned()
            .ok_or_else(|| Error::Parse(format!("no market {slug}")))
    }

    fn venue_name(&self) -> &'static str {
        "fake"
    }
}

/// Deterministic test double for the book stream.
#[derive(Debug, Default)]
pub struct ScriptedBookStream {
    events: VecDeque<BookUpdateEvent>,
    subscriptions: Vec<Vec<TokenId>>,
    delivered: usize,
    hang_when_empty: bool,
}

impl ScriptedBookStream {
    pub fn push(&mut self, event: BookUpdateEvent) {
        self.events.push_back(event);
    }

    /// Never close: wait forever once the script runs out.
    pub fn hang_when_empty(mut self) -> Self {
        self.hang_when_empty = true;
        self
    }

    pub fn subscriptions(&self) -> &[Vec<TokenId>] {
        &self.subscriptions
    }

    /// Number of events handed out so far.
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

#[async_trait]
impl BookStream for ScriptedBookStream {
    async fn subscribe(&mut self, tokens: &[TokenId]) -> Result<()> {
        self.subscriptions.push(tokens.to_vec());
        Ok(())
    }

    async fn next_event(&mut self) -> Result<Option<BookUpdateEvent>> {
        match self.events.pop_front() {
            Some(event) => {
                self.delivered += 1;
                Ok(Some(event))
            }
            None if self.hang_when_empty => std::future::pending().await,
            None => Ok(None),
        }
    }

    fn venue_name(&self) -> &'static str {
        "fake"
    }
}

/// Reference source answering from a fixed ticker table.
#[derive(Debug, Default)]
pub struct ScriptedReference {
    changes: HashMap<String, f64>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedReference {
    pub fn with_change(mut self, ticker: &str, change: f64) -> Self {
        self.changes.insert(ticker.to_string(), change);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("lock").clone()
    }
}

#[async_trait]
impl ReferencePrices for ScriptedReference {
    async fn change(&self, ticker: &str) -> Result<f64> {
        self.calls.lock().expect("lock").push(ticker.to_string());
        self.changes
            .get(ticker)
            .copied()
            .ok_or_else(|| Error::Parse(format!("no quote for {ticker}")))
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}
