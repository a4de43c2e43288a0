//! CPU program and SKU reference data.

use serde::Serialize;

use crate::synth::ParseError;

/// Hybrid core topology of a SKU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoreTopology {
    /// Performance-core count
    pub performance_cores: usize,
    /// Efficiency-core count
    pub efficiency_cores: usize,
    /// Logical thread count
    pub threads: usize,
}

impl CoreTopology {
    /// Total physical core count.
    pub fn total(&self) -> usize {
        self.performance_cores + self.efficiency_cores
    }

    /// Build a topology from a total core count using the ~40% P / 60% E
    /// split applied when the P/E breakdown is unknown.
    pub fn from_total(total: usize) -> Self {
        let performance_cores = ((total as f64) * 0.4).round() as usize;
        CoreTopology {
            performance_cores,
            efficiency_cores: total - performance_cores,
            threads: total,
        }
    }

    /// Parse a legacy string-formatted topology such as "24C/32T".
    ///
    /// Only the ingestion boundary for string-formatted catalogs should
    /// need this; the built-in catalog carries structured topologies.
    pub fn parse(value: &str) -> Result<Self, ParseError> {
        let malformed = || ParseError::Topology(value.to_string());

        let (cores_part, threads_part) = value.split_once('/').ok_or_else(malformed)?;
        let cores = cores_part
            .strip_suffix('C')
            .and_then(|n| n.parse::<usize>().ok())
            .ok_or_else(malformed)?;
        let threads = threads_part
            .strip_suffix('T')
            .and_then(|n| n.parse::<usize>().ok())
            .ok_or_else(malformed)?;

        if cores == 0 || threads < cores {
            return Err(malformed());
        }

        let mut topology = Self::from_total(cores);
        topology.threads = threads;
        Ok(topology)
    }
}

impl std::fmt::Display for CoreTopology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}C/{}T", self.total(), self.threads)
    }
}

/// A CPU product variant within a program.
#[derive(Debug, Clone, Serialize)]
pub struct Sku {
    /// Stable id used in keys (e.g. "arl-s")
    pub id: &'static str,
    /// Marketing name
    pub name: &'static str,
    /// Core topology
    pub topology: CoreTopology,
    /// Thermal design power label
    pub tdp: &'static str,
}

/// A CPU program with its ordered SKU list.
#[derive(Debug, Clone, Serialize)]
pub struct Program {
    /// Stable id (e.g. "arl")
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Accent color used by the dashboard
    pub color: &'static str,
    /// SKUs, flagship first
    pub skus: &'static [Sku],
}

/// Built-in program catalog, flagship programs first.
pub static PROGRAMS: &[Program] = &[
    Program {
        id: "arl",
        name: "Arrow Lake",
        color: "#0068b5",
        skus: &[
            Sku {
                id: "arl-s",
                name: "Core Ultra 9 285K",
                topology: CoreTopology {
                    performance_cores: 8,
                    efficiency_cores: 16,
                    threads: 24,
                },
                tdp: "125W",
            },
            Sku {
                id: "arl-hx",
                name: "Core Ultra 9 275HX",
                topology: CoreTopology {
                    performance_cores: 8,
                    efficiency_cores: 16,
                    threads: 24,
                },
                tdp: "55W",
            },
            Sku {
                id: "arl-h",
                name: "Core Ultra 7 265H",
                topology: CoreTopology {
                    performance_cores: 6,
                    efficiency_cores: 10,
                    threads: 16,
                },
                tdp: "28W",
            },
        ],
    },
    Program {
        id: "lnl",
        name: "Lunar Lake",
        color: "#00c7fd",
        skus: &[Sku {
            id: "lnl-v",
            name: "Core Ultra 7 268V",
            topology: CoreTopology {
                performance_cores: 4,
                efficiency_cores: 4,
                threads: 8,
            },
            tdp: "17W",
        }],
    },
    Program {
        id: "ptl",
        name: "Panther Lake",
        color: "#8f5dd7",
        skus: &[
            Sku {
                id: "ptl-h",
                name: "Core Ultra 9 388H",
                topology: CoreTopology {
                    performance_cores: 4,
                    efficiency_cores: 12,
                    threads: 16,
                },
                tdp: "25W",
            },
            Sku {
                id: "ptl-u",
                name: "Core Ultra 5 338U",
                topology: CoreTopology {
                    performance_cores: 4,
                    efficiency_cores: 4,
                    threads: 8,
                },
                tdp: "15W",
            },
        ],
    },
];
