//! The crypto trivia question bank
//!
//! Options are stored in canonical order; `answer` indexes the correct one.
//! Each quiz run shuffles both the question order and the on-screen option
//! order, so the canonical layout never shows through.

/// A single multiple-choice question
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    /// Index of the correct entry in `options`
    pub answer: usize,
}

pub const QUESTIONS: [Question; 25] = [
    Question {
        prompt: "What is the smallest unit of Bitcoin, named after its creator?",
        options: ["Finney", "Wei", "Satoshi", "Gwei"],
        answer: 2,
    },
    Question {
        prompt: "In what year was the Bitcoin whitepaper published?",
        options: ["2007", "2008", "2009", "2010"],
        answer: 1,
    },
    Question {
        prompt: "Who is the pseudonymous creator of Bitcoin?",
        options: [
            "Hal Finney",
            "Nick Szabo",
            "Vitalik Buterin",
            "Satoshi Nakamoto",
        ],
        answer: 3,
    },
    Question {
        prompt: "What does NFT stand for?",
        options: [
            "Non-Fiat Token",
            "Networked Financial Trust",
            "Non-Fungible Token",
            "New Financial Trend",
        ],
        answer: 2,
    },
    Question {
        prompt: "What is Ethereum's native cryptocurrency called?",
        options: ["Ethereum Classic", "Ether", "Solana", "Cardano"],
        answer: 1,
    },
    Question {
        prompt: "What is the term for the computational process of creating new Bitcoin blocks?",
        options: ["Staking", "Burning", "Mining", "Yield Farming"],
        answer: 2,
    },
    Question {
        prompt: "What consensus mechanism did Ethereum switch to in 2022?",
        options: [
            "Proof-of-Work (PoW)",
            "Delegated PoS",
            "Proof-of-Authority",
            "Proof-of-Stake (PoS)",
        ],
        answer: 3,
    },
    Question {
        prompt: "Which cryptocurrency is often nicknamed 'Digital Silver'?",
        options: [
            "Ripple (XRP)",
            "Litecoin (LTC)",
            "Dogecoin (DOGE)",
            "Monero (XMR)",
        ],
        answer: 1,
    },
    Question {
        prompt: "What is a 'gas fee' used for on the Ethereum network?",
        options: [
            "Paying for mining equipment",
            "Transaction execution and computation",
            "Buying new tokens",
            "Wallet storage fees",
        ],
        answer: 1,
    },
    Question {
        prompt: "What is the maximum supply of Bitcoin?",
        options: ["Unlimited", "100 Million", "21 Million", "42 Million"],
        answer: 2,
    },
    Question {
        prompt: "Decentralized applications built on blockchain are commonly referred to as:",
        options: ["DNCs", "DLTs", "DApps", "DEXs"],
        answer: 2,
    },
    Question {
        prompt: "What term describes a sudden, sharp drop in cryptocurrency prices?",
        options: ["Liquidation", "Correction", "Rekt", "Pump"],
        answer: 1,
    },
    Question {
        prompt: "What cryptographic concept is fundamental to blockchain security and immutability?",
        options: ["Public Key", "Hashing", "Smart Contract", "Tokenization"],
        answer: 1,
    },
    Question {
        prompt: "A wallet that requires a constant internet connection is known as a:",
        options: ["Cold Wallet", "Hardware Wallet", "Hot Wallet", "Paper Wallet"],
        answer: 2,
    },
    Question {
        prompt: "What does DAO stand for?",
        options: [
            "Digital Asset Organization",
            "Decentralized Autonomous Organization",
            "Distributed Account Operator",
            "Data Access Oracle",
        ],
        answer: 1,
    },
    Question {
        prompt: "What is 'HODL' an acronym or term for in the crypto community?",
        options: [
            "High Output Data Layer",
            "Holding On for Dear Life",
            "Hashing Our Digital Ledger",
            "Hybrid Open Distributed Limit",
        ],
        answer: 1,
    },
    Question {
        prompt: "What does the term 'fork' typically refer to in blockchain technology?",
        options: [
            "A simple network upgrade",
            "A complete transfer of assets",
            "A protocol change or a split in the blockchain",
            "A token burning event",
        ],
        answer: 2,
    },
    Question {
        prompt: "What is KYC short for in crypto exchanges?",
        options: [
            "Key Your Crypto",
            "Know Your Customer",
            "Keeping Your Capital",
            "Keep Yield Coming",
        ],
        answer: 1,
    },
    Question {
        prompt: "What is the process of deliberately removing tokens from circulation, often to reduce supply?",
        options: ["Airdrop", "Mining", "Burning", "Minting"],
        answer: 2,
    },
    Question {
        prompt: "What are 'Layer 2' solutions primarily designed to improve for a main blockchain?",
        options: [
            "Decentralization",
            "Security",
            "Scalability and speed",
            "Tokenomics",
        ],
        answer: 2,
    },
    Question {
        prompt: "What is the term for receiving cryptocurrency rewards for holding funds in a wallet to support network operations?",
        options: ["Farming", "Mining", "Lending", "Staking"],
        answer: 3,
    },
    Question {
        prompt: "Which major stablecoin is algorithmically managed and not backed by fiat reserves?",
        options: ["USDC", "Tether (USDT)", "DAI", "BUSD"],
        answer: 2,
    },
    Question {
        prompt: "Which country officially adopted Bitcoin as legal tender in 2021?",
        options: ["United States", "El Salvador", "Switzerland", "Japan"],
        answer: 1,
    },
    Question {
        prompt: "What is a major characteristic of a stablecoin?",
        options: [
            "It is highly volatile",
            "It is pegged to a fiat currency or commodity",
            "It only operates on the Ethereum network",
            "It requires PoW consensus",
        ],
        answer: 1,
    },
    Question {
        prompt: "The first ever recorded purchase using Bitcoin was for what item?",
        options: ["A computer", "A car", "A pizza", "A book"],
        answer: 2,
    },
];
