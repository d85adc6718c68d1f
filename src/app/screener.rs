//! Screener session: resolve, stream, correlate, render.
//!
//! A session moves through three phases:
//!
//! 1. **Resolving** - every watched instrument is mapped to its daily market.
//!    Any failure aborts the run, since a missing market would shift rows.
//! 2. **Streaming** - book events are pulled one at a time and fully handled
//!    (derived, joined with the reference change, stored, gate-checked)
//!    before the next one is read.
//! 3. **Done** - the completion gate is satisfied, the stream sent a
//!    non-book event or closed, or the session timed out. Rows are built in
//!    watch-list order, with placeholders for instruments that never reported.

use std::collections::HashMap;
use std::time::Duration;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::domain::{
    derive_quote, AssetIndex, BookUpdateEvent, CompletionGate, CorrelationTable, DerivedMetrics,
    EventKind, MetricMode, ResolvedMarket, ScreenerRow, Thresholds, TokenId, WatchedInstrument,
};
use crate::error::{Error, Result};
use crate::port::{BookStream, MarketResolver, ReferencePrices};

/// Everything a session needs from configuration.
#[derive(Debug, Clone)]
pub struct ScreenerSettings {
    pub instruments: Vec<WatchedInstrument>,
    pub mode: MetricMode,
    pub date: NaiveDate,
    pub thresholds: Thresholds,
    pub timeout: Option<Duration>,
}

/// Why streaming stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// Every watched instrument reported.
    Complete,
    /// The stream delivered an event that is not a book snapshot.
    Marker(String),
    /// The upstream closed the stream.
    Closed,
    /// The session timeout elapsed.
    TimedOut,
}

/// Outcome of a finished session.
#[derive(Debug, Clone)]
pub struct ScreenReport {
    pub mode: MetricMode,
    pub rows: Vec<ScreenerRow>,
    pub filled: usize,
    pub end: SessionEnd,
}

/// What the event handler wants the stream to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop(SessionEnd),
}

/// Drives one screening run against the given collaborators.
pub struct Screener<'a> {
    settings: ScreenerSettings,
    resolver: &'a dyn MarketResolver,
    reference: Option<&'a dyn ReferencePrices>,
}

impl<'a> Screener<'a> {
    /// A screener with the reference lookup disabled.
    #[must_use]
    pub fn new(settings: ScreenerSettings, resolver: &'a dyn MarketResolver) -> Self {
        Self {
            settings,
            resolver,
            reference: None,
        }
    }

    /// Join every filled instrument with a reference change from `reference`.
    #[must_use]
    pub fn with_reference(mut self, reference: &'a dyn ReferencePrices) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Resolve every instrument to its market, in watch-list order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Resolution`] for the first instrument that fails, or
    /// whose streamed token is already owned by an earlier instrument.
    pub async fn resolve(&self) -> Result<Vec<ResolvedMarket>> {
        let mut markets = Vec::with_capacity(self.settings.instruments.len());
        let mut owners: HashMap<TokenId, usize> = HashMap::new();

        for instrument in &self.settings.instruments {
            let slug = instrument.market_slug(self.settings.date);
            debug!(symbol = %instrument.symbol, slug = %slug, "Resolving market");

            let market = self
                .resolver
                .resolve(&slug)
                .await
                .map_err(|e| Error::Resolution {
                    symbol: instrument.symbol.clone(),
                    slug: slug.clone(),
                    reason: e.to_string(),
                })?;

            // A shared token could only ever fill the first owner's row.
            if let Some(&first) = owners.get(market.primary_token()) {
                return Err(Error::Resolution {
                    symbol: instrument.symbol.clone(),
                    slug: market.slug().to_string(),
                    reason: format!(
                        "outcome token {} is already watched by {}",
                        market.primary_token(),
                        self.settings.instruments[first].symbol
                    ),
                });
            }
            owners.insert(market.primary_token().clone(), markets.len());

            info!(
                symbol = %instrument.symbol,
                slug = %market.slug(),
                token = %market.primary_token(),
                "Resolved market"
            );
            markets.push(market);
        }

        Ok(markets)
    }

    /// Run a full session on `stream` and build the report.
    ///
    /// # Errors
    ///
    /// Resolution, subscription, malformed-price and reference-lookup
    /// failures are returned as-is; nothing is rendered in that case.
    pub async fn run(&self, stream: &mut dyn BookStream) -> Result<ScreenReport> {
        info!(
            instruments = self.settings.instruments.len(),
            date = %self.settings.date,
            mode = %self.settings.mode,
            venue = self.resolver.venue_name(),
            "Resolving markets"
        );
        let markets = self.resolve().await?;
        let index = AssetIndex::from_markets(&markets);

        info!(
            tokens = index.len(),
            venue = stream.venue_name(),
            reference = self.reference.map_or("disabled", |r| r.provider_name()),
            "Streaming order books"
        );
        stream.subscribe(index.tokens()).await?;

        let mut session = Session::new(&self.settings, index, self.reference);
        let end = match self.settings.timeout {
            Some(limit) => match tokio::time::timeout(limit, session.consume(stream)).await {
                Ok(end) => end?,
                Err(_) => {
                    warn!(timeout = ?limit, "Session timed out");
                    SessionEnd::TimedOut
                }
            },
            None => session.consume(stream).await?,
        };

        info!(
            filled = session.gate.filled(),
            total = session.gate.total(),
            end = ?end,
            "Session finished"
        );

        Ok(session.into_report(end))
    }
}

/// Mutable state of the streaming phase, owned by one session.
struct Session<'s> {
    settings: &'s ScreenerSettings,
    reference: Option<&'s dyn ReferencePrices>,
    index: AssetIndex,
    table: CorrelationTable,
    gate: CompletionGate,
}

impl<'s> Session<'s> {
    fn new(
        settings: &'s ScreenerSettings,
        index: AssetIndex,
        reference: Option<&'s dyn ReferencePrices>,
    ) -> Self {
        let total = settings.instruments.len();
        Self {
            settings,
            reference,
            index,
            table: CorrelationTable::new(total),
            gate: CompletionGate::new(total),
        }
    }

    /// Pull events until the handler says stop or the stream closes.
    async fn consume(&mut self, stream: &mut dyn BookStream) -> Result<SessionEnd> {
        while let Some(event) = stream.next_event().await? {
            if let Flow::Stop(end) = self.handle(event).await? {
                return Ok(end);
            }
        }
        Ok(SessionEnd::Closed)
    }

    async fn handle(&mut self, event: BookUpdateEvent) -> Result<Flow> {
        // Any non-book event ends the whole session, not just its asset.
        if let EventKind::Other(kind) = event.kind {
            info!(kind = %kind, asset_id = %event.asset_id, "Non-book event, stopping");
            return Ok(Flow::Stop(SessionEnd::Marker(kind)));
        }

        let Some(position) = self.index.position(&event.asset_id) else {
            warn!(asset_id = %event.asset_id, "Unknown asset ID");
            return Ok(Flow::Continue);
        };
        let settings = self.settings;
        let instrument = &settings.instruments[position];

        if self.table.is_filled(position) {
            debug!(symbol = %instrument.symbol, "Instrument already filled, skipping");
            return Ok(self.flow());
        }

        let quote = derive_quote(settings.mode, &event.bids, &event.asks).map_err(|source| {
            Error::Book {
                symbol: instrument.symbol.clone(),
                source,
            }
        })?;

        let change = match self.reference {
            Some(reference) => {
                let ticker = instrument.reference_ticker();
                let change = reference
                    .change(ticker)
                    .await
                    .map_err(|e| Error::ReferenceLookup {
                        symbol: instrument.symbol.clone(),
                        ticker: ticker.to_string(),
                        reason: e.to_string(),
                    })?;
                Some(change)
            }
            None => None,
        };

        self.table.write(position, DerivedMetrics::new(quote, change));
        self.gate.record(position);

        info!(
            symbol = %instrument.symbol,
            filled = self.gate.filled(),
            total = self.gate.total(),
            "Instrument filled"
        );

        Ok(self.flow())
    }

    fn flow(&self) -> Flow {
        if self.gate.should_continue() {
            Flow::Continue
        } else {
            Flow::Stop(SessionEnd::Complete)
        }
    }

    fn into_report(self, end: SessionEnd) -> ScreenReport {
        let rows = self
            .settings
            .instruments
            .iter()
            .zip(self.table.iter())
            .map(|(instrument, metrics)| {
                ScreenerRow::build(instrument, metrics, &self.settings.thresholds)
            })
            .collect();

        ScreenReport {
            mode: self.settings.mode,
            rows,
            filled: self.gate.filled(),
            end,
        }
    }
}
